use scrollmark_core::Message;
use scrollmark_toolkit::js::dommanip::html_window;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use crate::util::error::confused_browser;

/* Owns a listener on the window for as long as it lives. finish() (or drop) takes it off again. */
pub(crate) struct WindowListener {
    name: String,
    closure: Option<Closure<dyn FnMut(JsValue)>>
}

impl WindowListener {
    pub(crate) fn new<F>(name: &str, cb: F) -> Result<WindowListener,Message> where F: FnMut(JsValue) + 'static {
        let closure = Closure::wrap(Box::new(cb) as Box<dyn FnMut(JsValue)>);
        let window = html_window().map_err(Message::ConfusedWebBrowser)?;
        confused_browser(window.add_event_listener_with_callback(name,closure.as_ref().unchecked_ref()))?;
        Ok(WindowListener {
            name: name.to_string(),
            closure: Some(closure)
        })
    }

    pub(crate) fn finish(&mut self) -> Result<(),Message> {
        if let Some(closure) = self.closure.take() {
            let window = html_window().map_err(Message::ConfusedWebBrowser)?;
            confused_browser(window.remove_event_listener_with_callback(&self.name,closure.as_ref().unchecked_ref()))?;
        }
        Ok(())
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        self.finish().ok();
    }
}
