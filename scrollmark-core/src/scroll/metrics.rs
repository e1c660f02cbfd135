use crate::util::message::Message;

/* Where the page is, read fresh from the host on each tick. In the browser these are the document scroll
 * offset, the tracked element's rendered height and the window's inner height.
 */
pub trait ScrollEnvironment {
    fn scroll_offset(&self) -> Result<f64,Message>;
    fn tracked_height(&self) -> Result<f64,Message>;
    fn viewport_height(&self) -> Result<f64,Message>;
}

#[derive(Clone,Copy,Debug,PartialEq)]
pub struct ScrollMetrics {
    pub scroll_offset: f64,
    pub max_scroll_offset: f64
}

impl ScrollMetrics {
    pub fn new(scroll_offset: f64, max_scroll_offset: f64) -> ScrollMetrics {
        ScrollMetrics { scroll_offset, max_scroll_offset }
    }

    pub fn calculate(env: &dyn ScrollEnvironment) -> Result<ScrollMetrics,Message> {
        let scroll_offset = env.scroll_offset()?;
        let max_scroll_offset = env.tracked_height()? - env.viewport_height()?;
        Ok(ScrollMetrics { scroll_offset, max_scroll_offset })
    }

    /* None when content is no taller than the viewport (or the host gave us garbage): there is no meaningful
     * percentage and nothing should trigger.
     */
    pub fn percentage(&self) -> Option<f64> {
        if !self.scroll_offset.is_finite() || !self.max_scroll_offset.is_finite() || self.max_scroll_offset <= 0. {
            return None;
        }
        Some(self.scroll_offset / self.max_scroll_offset * 100.)
    }
}
