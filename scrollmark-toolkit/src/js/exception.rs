use wasm_bindgen::JsValue;

use crate::warn_extra;

pub fn js_error_string(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}",e))
}

/* For calls whose failure we note but otherwise don't care about */
pub fn js_result_to_option_console<T>(value: Result<T,JsValue>) -> Option<T> {
    match value {
        Ok(v) => Some(v),
        Err(e) => {
            warn_extra!("js error: {}",js_error_string(&e));
            None
        }
    }
}
