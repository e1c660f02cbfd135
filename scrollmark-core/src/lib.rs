mod run {
    pub(crate) mod config;
    pub(crate) mod tracker;
}

mod scroll {
    pub(crate) mod channel;
    pub(crate) mod metrics;
    pub(crate) mod percentage;
    pub(crate) mod subject;
    pub(crate) mod threshold;
}

mod toast {
    pub(crate) mod presenter;
}

mod util {
    pub(crate) mod message;
}


pub use crate::run::config::{ ScrollConfigKey, ScrollMarkConfig };
pub use crate::run::tracker::ScrollTracker;
pub use crate::scroll::channel::{ NotificationChannel, Subscription };
pub use crate::scroll::metrics::{ ScrollEnvironment, ScrollMetrics };
pub use crate::scroll::percentage::PercentageObserver;
pub use crate::scroll::subject::{ ObserverRef, ScrollObserver, ScrollSubject };
pub use crate::scroll::threshold::{ FireMode, ThresholdCrossed, ThresholdSet, ThresholdTrigger, THRESHOLD_CHANNEL };
pub use crate::toast::presenter::{ HideScheduler, ToastPresenter, ToastState, ToastSurface, PERCENTAGE_PLACEHOLDER };
pub use crate::util::message::{ Message, MessageLevel, MessageReporter };
