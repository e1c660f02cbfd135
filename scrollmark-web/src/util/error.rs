use anyhow::{ self, anyhow as err };
use scrollmark_core::Message;
use scrollmark_toolkit::js::exception::js_error_string;
use wasm_bindgen::JsValue;

pub(crate) fn confused_browser<R>(result: Result<R,JsValue>) -> Result<R,Message> {
    result.map_err(|e| Message::ConfusedWebBrowser(js_error_string(&e)))
}

pub(crate) fn confused_browser_option<R>(result: Option<R>, msg: &str) -> Result<R,Message> {
    result.ok_or_else(|| Message::ConfusedWebBrowser(msg.to_string()))
}

pub(crate) fn js_error<R>(result: Result<R,JsValue>) -> anyhow::Result<R> {
    result.map_err(|e| err!(js_error_string(&e)))
}

pub(crate) fn message_to_js(message: Message) -> JsValue {
    JsValue::from_str(&message.to_string())
}
