use std::sync::{ Arc, Mutex };
use scrollmark_toolkit::{ lock, log_extra };
use crate::util::message::{ Message, MessageReporter };

pub const PERCENTAGE_PLACEHOLDER : &str = "{percentage}";

/* The thing the toast is drawn on. In the browser, an element found by id whose class list toggles it. */
pub trait ToastSurface {
    fn show(&mut self, message: &str) -> Result<(),Message>;
    fn hide(&mut self) -> Result<(),Message>;
}

/* Runs a callback once, later. No handle is returned: scheduled hides are never cancelled. */
pub trait HideScheduler {
    fn schedule(&self, delay_ms: u32, cb: Box<dyn FnOnce() + 'static>) -> Result<(),Message>;
}

#[derive(Clone,Debug,PartialEq,Eq)]
pub enum ToastState {
    Hidden,
    Visible { message: String, generation: u64 }
}

struct ToastPresenterState {
    surface: Box<dyn ToastSurface>,
    state: ToastState,
    generation: u64
}

impl ToastPresenterState {
    /* A hide timer only gets to hide the toast it was set for. Anything shown since has its own timer. */
    fn expire(&mut self, generation: u64) -> Result<(),Message> {
        let current = match &self.state {
            ToastState::Visible { generation, .. } => Some(*generation),
            ToastState::Hidden => None
        };
        if current != Some(generation) {
            log_extra!("stale toast timer {} ignored",generation);
            return Ok(());
        }
        self.state = ToastState::Hidden;
        self.surface.hide()
    }
}

#[derive(Clone)]
pub struct ToastPresenter {
    state: Arc<Mutex<ToastPresenterState>>,
    scheduler: Arc<dyn HideScheduler>,
    template: String,
    duration_ms: u32,
    reporter: MessageReporter
}

impl ToastPresenter {
    pub fn new(surface: Box<dyn ToastSurface>, scheduler: Arc<dyn HideScheduler>, template: &str, duration_ms: u32, reporter: &MessageReporter) -> ToastPresenter {
        ToastPresenter {
            state: Arc::new(Mutex::new(ToastPresenterState {
                surface,
                state: ToastState::Hidden,
                generation: 0
            })),
            scheduler,
            template: template.to_string(),
            duration_ms,
            reporter: reporter.clone()
        }
    }

    pub fn message_for(&self, percentage: u32) -> String {
        self.template.replace(PERCENTAGE_PLACEHOLDER,&percentage.to_string())
    }

    pub fn show_toast(&self, percentage: u32) -> Result<(),Message> {
        let message = self.message_for(percentage);
        let mut state = lock!(self.state);
        state.surface.show(&message)?;
        state.generation += 1;
        let generation = state.generation;
        state.state = ToastState::Visible { message, generation };
        drop(state);
        let weak = Arc::downgrade(&self.state);
        let reporter = self.reporter.clone();
        self.scheduler.schedule(self.duration_ms,Box::new(move || {
            if let Some(state) = weak.upgrade() {
                let result = lock!(state).expire(generation);
                if let Err(e) = result {
                    reporter.report(&e);
                }
            }
        }))
    }

    pub fn state(&self) -> ToastState { lock!(self.state).state.clone() }

    pub fn visible(&self) -> bool {
        match self.state() {
            ToastState::Visible { .. } => true,
            ToastState::Hidden => false
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;
    use crate::test::fakes::{ FakeSurface, ManualScheduler };
    use crate::util::message::{ Message, MessageReporter };
    use super::{ ToastPresenter, ToastState };

    const TEMPLATE : &str = "You've scrolled to {percentage}% of the article";

    fn setup() -> (ToastPresenter,FakeSurface,ManualScheduler) {
        let surface = FakeSurface::new();
        let scheduler = ManualScheduler::new();
        let presenter = ToastPresenter::new(Box::new(surface.clone()),Arc::new(scheduler.clone()),TEMPLATE,1000,&MessageReporter::new());
        (presenter,surface,scheduler)
    }

    #[test]
    fn test_lifecycle() {
        let (presenter,surface,scheduler) = setup();
        assert_eq!(ToastState::Hidden,presenter.state());
        presenter.show_toast(50).expect("show");
        assert!(presenter.visible());
        assert!(surface.visible());
        assert!(surface.html().contains("50"));
        assert_eq!("You've scrolled to 50% of the article",surface.html());
        scheduler.advance(999);
        assert!(presenter.visible());
        scheduler.advance(1);
        assert!(!presenter.visible());
        assert!(!surface.visible());
    }

    #[test]
    fn test_reshow_not_hidden_by_old_timer() {
        let (presenter,surface,scheduler) = setup();
        presenter.show_toast(25).expect("show");
        scheduler.advance(600);
        presenter.show_toast(50).expect("show");
        assert_eq!("You've scrolled to 50% of the article",surface.html());
        scheduler.advance(400);
        /* first timer has fired but the newer toast must survive it */
        assert!(presenter.visible());
        assert!(surface.visible());
        scheduler.advance(600);
        assert!(!presenter.visible());
        assert_eq!(ToastState::Hidden,presenter.state());
    }

    #[test]
    fn test_missing_surface() {
        let (presenter,surface,scheduler) = setup();
        surface.remove();
        let e = presenter.show_toast(25).err().expect("error");
        assert!(matches!(e,Message::MissingPresentationSurface(_)));
        assert_eq!(ToastState::Hidden,presenter.state());
        assert_eq!(0,scheduler.pending());
    }

    #[test]
    fn test_template() {
        let (presenter,_,_) = setup();
        assert_eq!("You've scrolled to 100% of the article",presenter.message_for(100));
    }
}
