use std::fmt::{ self, Display };
use std::hash::{ Hash, Hasher };
use std::collections::hash_map::DefaultHasher;
use std::sync::{ Arc, Mutex };
use scrollmark_config::ConfigError;
use scrollmark_toolkit::{ error, lock, warn };
use crate::toast::presenter::HideScheduler;

fn calculate_hash<T: Hash>(t: &T) -> u64 {
    let mut s = DefaultHasher::new();
    t.hash(&mut s);
    s.finish()
}

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum MessageLevel {
    Warn,
    Error
}

#[derive(Clone,Debug,PartialEq,Eq,Hash)]
pub enum Message {
    MissingTrackedElement(String),
    MissingPresentationSurface(String),
    ObserverFailure(String,String),
    ConfusedWebBrowser(String),
    BadConfig(ConfigError),
    CodeInvariantFailed(String)
}

impl Message {
    pub fn level(&self) -> MessageLevel {
        match self {
            Message::MissingPresentationSurface(_) => MessageLevel::Warn,
            Message::ObserverFailure(_,_) => MessageLevel::Warn,
            _ => MessageLevel::Error
        }
    }

    pub fn code(&self) -> (u64,u64) {
        // Next code is 6
        match self {
            Message::MissingTrackedElement(s) => (0,calculate_hash(s)),
            Message::MissingPresentationSurface(s) => (1,calculate_hash(s)),
            Message::ObserverFailure(o,s) => (2,calculate_hash(&(o,s))),
            Message::ConfusedWebBrowser(s) => (3,calculate_hash(s)),
            Message::BadConfig(e) => (4,calculate_hash(e)),
            Message::CodeInvariantFailed(s) => (5,calculate_hash(s))
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::MissingTrackedElement(s) => write!(f,"no element to track matches '{}'",s),
            Message::MissingPresentationSurface(s) => write!(f,"toast element '{}' is missing",s),
            Message::ObserverFailure(o,s) => write!(f,"scroll observer '{}' failed: {}",o,s),
            Message::ConfusedWebBrowser(s) => write!(f,"unexpected browser behaviour: {}",s),
            Message::BadConfig(e) => write!(f,"bad configuration: {}",e),
            Message::CodeInvariantFailed(s) => write!(f,"code invariant failed: {}",s)
        }
    }
}

impl std::error::Error for Message {}

impl From<ConfigError> for Message {
    fn from(e: ConfigError) -> Message { Message::BadConfig(e) }
}

/* Everything reported goes to the console and then, if the host has asked for them, to its callback. */
#[derive(Clone)]
pub struct MessageReporter(Arc<Mutex<Option<Box<dyn FnMut(&Message) + 'static>>>>);

impl MessageReporter {
    pub fn new() -> MessageReporter {
        MessageReporter(Arc::new(Mutex::new(None)))
    }

    pub fn set<F>(&self, cb: F) where F: FnMut(&Message) + 'static {
        *lock!(self.0) = Some(Box::new(cb));
    }

    /* The callback runs later, from the scheduler, never inside whatever was going on when the message was
     * reported. Host callbacks are free to call back into us.
     */
    pub fn set_deferred<F>(&self, scheduler: Arc<dyn HideScheduler>, cb: F) where F: FnMut(&Message) + 'static {
        let cb = Arc::new(Mutex::new(cb));
        self.set(move |message| {
            let cb = cb.clone();
            let message = message.clone();
            let sent = scheduler.schedule(0,Box::new(move || {
                let mut cb = lock!(cb);
                (&mut *cb)(&message);
            }));
            if let Err(e) = sent {
                warn!("cannot deliver report: {}",e);
            }
        });
    }

    pub fn report(&self, message: &Message) {
        match message.level() {
            MessageLevel::Warn => { warn!("{}",message); },
            MessageLevel::Error => { error!("{}",message); }
        }
        if let Some(cb) = lock!(self.0).as_mut() {
            cb(message);
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::{ Arc, Mutex };
    use scrollmark_config::ConfigError;
    use crate::test::fakes::ManualScheduler;
    use super::{ Message, MessageReporter, MessageLevel };

    #[test]
    fn test_codes_stable() {
        let a = Message::MissingPresentationSurface("toast".to_string());
        let b = Message::MissingPresentationSurface("toast".to_string());
        let c = Message::MissingPresentationSurface("other".to_string());
        assert_eq!(a.code(),b.code());
        assert_eq!(1,a.code().0);
        assert_ne!(a.code(),c.code());
    }

    #[test]
    fn test_levels() {
        assert_eq!(MessageLevel::Warn,Message::MissingPresentationSurface("toast".to_string()).level());
        assert_eq!(MessageLevel::Warn,Message::ObserverFailure("a".to_string(),"b".to_string()).level());
        assert_eq!(MessageLevel::Error,Message::MissingTrackedElement("article".to_string()).level());
        assert_eq!(MessageLevel::Error,Message::from(ConfigError::UnknownConfigKey("x".to_string())).level());
    }

    #[test]
    fn test_reporter() {
        let seen = Arc::new(Mutex::new(vec![]));
        let reporter = MessageReporter::new();
        reporter.report(&Message::CodeInvariantFailed("unheard".to_string()));
        let seen2 = seen.clone();
        reporter.set(move |m| seen2.lock().unwrap().push(m.to_string()));
        reporter.report(&Message::MissingPresentationSurface("toast".to_string()));
        assert_eq!(vec!["toast element 'toast' is missing".to_string()],*seen.lock().unwrap());
    }

    #[test]
    fn test_reporter_deferred() {
        let seen = Arc::new(Mutex::new(vec![]));
        let scheduler = ManualScheduler::new();
        let reporter = MessageReporter::new();
        let seen2 = seen.clone();
        reporter.set_deferred(Arc::new(scheduler.clone()),move |m| seen2.lock().unwrap().push(m.to_string()));
        reporter.report(&Message::MissingPresentationSurface("toast".to_string()));
        reporter.report(&Message::CodeInvariantFailed("twice".to_string()));
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(2,scheduler.pending());
        scheduler.advance(0);
        assert_eq!(vec![
            "toast element 'toast' is missing".to_string(),
            "code invariant failed: twice".to_string()
        ],*seen.lock().unwrap());
    }
}
