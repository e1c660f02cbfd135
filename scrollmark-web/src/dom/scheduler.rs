use std::convert::TryFrom;
use scrollmark_core::{ HideScheduler, Message };
use scrollmark_toolkit::js::timer::timeout_once;

pub(crate) struct WindowScheduler;

impl HideScheduler for WindowScheduler {
    fn schedule(&self, delay_ms: u32, cb: Box<dyn FnOnce() + 'static>) -> Result<(),Message> {
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        timeout_once(delay,cb).map_err(Message::ConfusedWebBrowser)
    }
}
