use std::sync::{Arc, Mutex};
use lazy_static::lazy_static;
use crate::lock;

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Severity {
    Notice,
    Warning,
    Error
}

#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub enum Verbosity {
    Noisy,
    Normal,
    Quiet
}

impl Verbosity {
    pub fn from_string(str: &str) -> Option<Verbosity> {
        match str {
            "quiet" => Some(Verbosity::Quiet),
            "noisy" => Some(Verbosity::Noisy),
            "normal" => Some(Verbosity::Normal),
            _ => None
        }
    }

    fn level(&self) -> usize {
        match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Noisy => 2
        }
    }

    /* Would a message logged at `self` be shown when the console is set to `current`? */
    pub fn audible_at(&self, current: &Verbosity) -> bool {
        self.level() <= current.level()
    }
}

lazy_static! {
    static ref VERBOSITY : Arc<Mutex<Verbosity>> = Arc::new(Mutex::new(Verbosity::Normal));
    static ref PRINTER : Arc<Mutex<Option<Box<dyn FnMut(&Severity,&str) + 'static + Send>>>> = Arc::new(Mutex::new(None));
}

pub fn set_verbosity(verbosity: &Verbosity) {
    *lock!(VERBOSITY) = *verbosity;
}

pub fn set_printer<F>(cb: F) where F: FnMut(&Severity,&str) + 'static + Send {
    *lock!(PRINTER) = Some(Box::new(cb));
}

/* Don't call directly, use macros */
pub fn print(verbosity: &Verbosity, severity: &Severity, message: &str) {
    let current = *lock!(VERBOSITY);
    if !verbosity.audible_at(&current) { return; }
    if let Some(printer) = lock!(PRINTER).as_mut() {
        printer(severity,message);
    }
}

#[macro_export]
macro_rules! do_log {
    ($verb:tt,$sev:tt,$($arg:tt)*) => {{
        use $crate::console::{ print, Verbosity, Severity };
        print(&Verbosity::$verb,&Severity::$sev,&std::format!($($arg)*));
    }}
}

#[macro_export]
macro_rules! log { ($($arg:tt)*) => { $crate::do_log!(Normal,Notice,$($arg)*) } }
#[macro_export]
macro_rules! log_extra { ($($arg:tt)*) => { $crate::do_log!(Noisy,Notice,$($arg)*) } }
#[macro_export]
macro_rules! warn { ($($arg:tt)*) => { $crate::do_log!(Normal,Warning,$($arg)*) } }
#[macro_export]
macro_rules! warn_extra { ($($arg:tt)*) => { $crate::do_log!(Noisy,Warning,$($arg)*) } }
#[macro_export]
macro_rules! error { ($($arg:tt)*) => { $crate::do_log!(Normal,Error,$($arg)*) } }

#[cfg(test)]
mod test {
    use std::sync::{ Arc, Mutex };
    use super::{ set_printer, set_verbosity, Severity, Verbosity };

    #[test]
    fn test_verbosity_parse() {
        assert_eq!(Some(Verbosity::Quiet),Verbosity::from_string("quiet"));
        assert_eq!(Some(Verbosity::Normal),Verbosity::from_string("normal"));
        assert_eq!(Some(Verbosity::Noisy),Verbosity::from_string("noisy"));
        assert_eq!(None,Verbosity::from_string("loud"));
    }

    #[test]
    fn test_audible() {
        /* important messages always get through, chatter only when noisy */
        assert!(Verbosity::Quiet.audible_at(&Verbosity::Quiet));
        assert!(Verbosity::Quiet.audible_at(&Verbosity::Noisy));
        assert!(!Verbosity::Normal.audible_at(&Verbosity::Quiet));
        assert!(Verbosity::Normal.audible_at(&Verbosity::Normal));
        assert!(!Verbosity::Noisy.audible_at(&Verbosity::Normal));
        assert!(Verbosity::Noisy.audible_at(&Verbosity::Noisy));
    }

    #[test]
    fn test_print_filters_by_verbosity() {
        let heard = Arc::new(Mutex::new(vec![]));
        let heard2 = heard.clone();
        set_printer(move |severity,message| {
            if message.starts_with("console-test") {
                heard2.lock().unwrap().push((*severity,message.to_string()));
            }
        });
        set_verbosity(&Verbosity::Normal);
        crate::log!("console-test {}",1);
        crate::log_extra!("console-test chatter");
        crate::warn!("console-test {}",2);
        set_verbosity(&Verbosity::Quiet);
        crate::error!("console-test quiet");
        crate::warn!("console-test hushed");
        set_verbosity(&Verbosity::Normal);
        assert_eq!(vec![
            (Severity::Notice,"console-test 1".to_string()),
            (Severity::Warning,"console-test 2".to_string())
        ],*heard.lock().unwrap());
    }
}
