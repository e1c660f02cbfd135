use std::sync::{ Arc, Mutex };
use scrollmark_toolkit::{ lock, log };
use crate::run::config::{ ScrollConfigKey, ScrollMarkConfig };
use crate::scroll::channel::{ NotificationChannel, Subscription };
use crate::scroll::metrics::{ ScrollEnvironment, ScrollMetrics };
use crate::scroll::percentage::PercentageObserver;
use crate::scroll::subject::{ ObserverRef, ScrollSubject };
use crate::scroll::threshold::{ ThresholdCrossed, ThresholdTrigger, THRESHOLD_CHANNEL };
use crate::toast::presenter::{ HideScheduler, ToastPresenter, ToastSurface };
use crate::util::message::{ Message, MessageReporter };

/* The composition root. Everything the tracker touches in the outside world is handed to it: where to read
 * scroll positions from, where to draw the toast and how to wait before hiding it. Nothing happens until
 * start() and nothing happens after stop().
 */
pub struct ScrollTracker {
    environment: Box<dyn ScrollEnvironment>,
    subject: ScrollSubject,
    percentage: Arc<Mutex<PercentageObserver>>,
    channel: NotificationChannel<ThresholdCrossed>,
    presenter: ToastPresenter,
    presenter_subscription: Option<Subscription>,
    reporter: MessageReporter
}

impl ScrollTracker {
    pub fn new(config: &ScrollMarkConfig, environment: Box<dyn ScrollEnvironment>, surface: Box<dyn ToastSurface>, scheduler: Arc<dyn HideScheduler>) -> Result<ScrollTracker,Message> {
        let reporter = MessageReporter::new();
        let channel = NotificationChannel::new(THRESHOLD_CHANNEL);
        let trigger = ThresholdTrigger::new(config.thresholds()?,config.fire_mode()?,&channel);
        let percentage = Arc::new(Mutex::new(PercentageObserver::new(trigger)));
        let subject = ScrollSubject::new();
        subject.subscribe(&ObserverRef::new(percentage.clone()));
        let presenter = ToastPresenter::new(
            surface,scheduler,
            config.get_str(&ScrollConfigKey::ToastTemplate)?,
            config.get_u32(&ScrollConfigKey::ToastDuration)?,
            &reporter
        );
        Ok(ScrollTracker {
            environment,
            subject,
            percentage,
            channel,
            presenter,
            presenter_subscription: None,
            reporter
        })
    }

    pub fn is_running(&self) -> bool { self.presenter_subscription.is_some() }

    pub fn start(&mut self) {
        if self.is_running() { return; }
        lock!(self.percentage).reset();
        let presenter = self.presenter.clone();
        let reporter = self.reporter.clone();
        self.presenter_subscription = Some(self.channel.subscribe(move |crossed: &ThresholdCrossed| {
            if let Err(e) = presenter.show_toast(crossed.percentage()) {
                reporter.report(&e);
            }
        }));
        log!("scroll tracking started");
    }

    pub fn stop(&mut self) {
        if let Some(subscription) = self.presenter_subscription.take() {
            self.channel.unsubscribe(subscription);
            log!("scroll tracking stopped");
        }
    }

    /* One scroll event's worth of work. Observer failures have already been reported when they come back
     * here; the caller gets them too, to do with as it pleases.
     */
    pub fn tick(&self) -> Result<Vec<Message>,Message> {
        if !self.is_running() { return Ok(vec![]); }
        let metrics = ScrollMetrics::calculate(self.environment.as_ref()).map_err(|e| {
            self.reporter.report(&e);
            e
        })?;
        let failures = self.subject.notify(&metrics);
        for failure in failures.iter() {
            self.reporter.report(failure);
        }
        Ok(failures)
    }

    pub fn channel(&self) -> &NotificationChannel<ThresholdCrossed> { &self.channel }
    pub fn subject(&self) -> &ScrollSubject { &self.subject }
    pub fn presenter(&self) -> &ToastPresenter { &self.presenter }
    pub fn reporter(&self) -> &MessageReporter { &self.reporter }
}

impl Drop for ScrollTracker {
    fn drop(&mut self) {
        self.stop();
    }
}
