use scrollmark_toolkit::log_extra;
use crate::scroll::metrics::ScrollMetrics;
use crate::scroll::subject::ScrollObserver;
use crate::scroll::threshold::ThresholdTrigger;
use crate::util::message::Message;

pub struct PercentageObserver {
    trigger: ThresholdTrigger
}

impl PercentageObserver {
    pub fn new(trigger: ThresholdTrigger) -> PercentageObserver {
        PercentageObserver { trigger }
    }

    pub fn reset(&mut self) { self.trigger.reset(); }
}

impl ScrollObserver for PercentageObserver {
    fn update(&mut self, metrics: &ScrollMetrics) -> Result<(),Message> {
        match metrics.percentage() {
            Some(percentage) => { self.trigger.trigger(percentage); },
            None => {
                log_extra!("no scroll range to speak of ({:?}), not triggering",metrics);
            }
        }
        Ok(())
    }

    fn name(&self) -> &str { "percentage" }
}
