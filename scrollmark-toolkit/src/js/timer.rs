use wasm_bindgen::{prelude::Closure, JsCast};
use crate::js::dommanip::html_window;

/* Fire-and-forget: the callback runs once after delay_ms and the closure is then released by the JS side. No
 * handle is kept, so there is nothing to cancel.
 */
pub fn timeout_once<F>(delay_ms: i32, cb: F) -> Result<(),String> where F: FnOnce() + 'static {
    let closure = Closure::once_into_js(cb);
    html_window()?.set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(),delay_ms)
        .map_err(|e| format!("cannot set timeout: {:?}",e))?;
    Ok(())
}
