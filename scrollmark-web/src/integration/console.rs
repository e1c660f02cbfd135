use scrollmark_toolkit::console::{ set_printer, Severity };
use wasm_bindgen::JsValue;
use web_sys::console;

pub(crate) fn install_console() {
    console_error_panic_hook::set_once();
    set_printer(|severity,message| {
        let message = JsValue::from_str(message);
        match severity {
            Severity::Notice => console::log_1(&message),
            Severity::Warning => console::warn_1(&message),
            Severity::Error => console::error_1(&message)
        }
    });
}
