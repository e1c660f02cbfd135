use std::sync::{Arc, Mutex};

use crate::lock;

/* Callbacks which run exactly once, at run(). Anything added after that point runs immediately. Used for
 * teardown hooks.
 */
#[derive(Clone)]
pub struct OneShot {
    callbacks: Arc<Mutex<Option<Vec<Box<dyn FnOnce()>>>>>
}

impl OneShot {
    pub fn new() -> OneShot {
        OneShot {
            callbacks: Arc::new(Mutex::new(Some(vec![])))
        }
    }

    pub fn add<F>(&self, cb: F) where F: FnOnce() + 'static {
        let mut callbacks = lock!(self.callbacks);
        if let Some(pending) = callbacks.as_mut() {
            pending.push(Box::new(cb));
            return;
        }
        drop(callbacks);
        cb();
    }

    pub fn run(&self) {
        let callbacks = lock!(self.callbacks).take();
        if let Some(callbacks) = callbacks {
            for callback in callbacks {
                callback();
            }
        }
    }

    pub fn poll(&self) -> bool { lock!(self.callbacks).is_none() }
}
