use scrollmark_core::{ Message, ScrollEnvironment };
use scrollmark_toolkit::js::dommanip::query_selector;
use web_sys::{ HtmlElement, Window };
use crate::util::error::{ confused_browser, confused_browser_option };

/* Reads scroll state straight out of the page. The tracked element is found once, up front: if it isn't
 * there, we'd rather say so at startup than discover it on the first scroll.
 */
pub(crate) struct DomEnvironment {
    window: Window,
    tracked: HtmlElement
}

impl DomEnvironment {
    pub(crate) fn new(selector: &str) -> Result<DomEnvironment,Message> {
        let window = confused_browser_option(web_sys::window(),"cannot get window object")?;
        let tracked = query_selector(selector).map_err(Message::ConfusedWebBrowser)?
            .ok_or_else(|| Message::MissingTrackedElement(selector.to_string()))?;
        Ok(DomEnvironment { window, tracked })
    }
}

impl ScrollEnvironment for DomEnvironment {
    fn scroll_offset(&self) -> Result<f64,Message> {
        let offset = confused_browser(self.window.page_y_offset())?;
        if offset != 0. { return Ok(offset); }
        /* some browsers only report it on the root element */
        let root = self.window.document().and_then(|d| d.document_element());
        Ok(root.map(|e| e.scroll_top() as f64).unwrap_or(0.))
    }

    fn tracked_height(&self) -> Result<f64,Message> {
        Ok(self.tracked.offset_height() as f64)
    }

    fn viewport_height(&self) -> Result<f64,Message> {
        let height = confused_browser(self.window.inner_height())?;
        confused_browser_option(height.as_f64(),"window inner height is not a number")
    }
}
