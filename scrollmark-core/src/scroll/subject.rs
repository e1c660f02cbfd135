use std::sync::{ Arc, Mutex };
use scrollmark_toolkit::lock;
use crate::scroll::metrics::ScrollMetrics;
use crate::util::message::Message;

pub trait ScrollObserver {
    fn update(&mut self, metrics: &ScrollMetrics) -> Result<(),Message>;
    fn name(&self) -> &str { "anonymous" }
}

/* A handle on a subscribed observer. Two handles are the same observer when they point at the same
 * allocation, whatever else they contain.
 */
#[derive(Clone)]
pub struct ObserverRef(Arc<Mutex<dyn ScrollObserver>>);

impl ObserverRef {
    pub fn new(observer: Arc<Mutex<dyn ScrollObserver>>) -> ObserverRef {
        ObserverRef(observer)
    }

    fn address(&self) -> *const () { Arc::as_ptr(&self.0) as *const () }

    pub fn same(&self, other: &ObserverRef) -> bool {
        self.address() == other.address()
    }

    fn update(&self, metrics: &ScrollMetrics) -> Result<(),Message> {
        let mut observer = lock!(self.0);
        observer.update(metrics).map_err(|e| {
            Message::ObserverFailure(observer.name().to_string(),e.to_string())
        })
    }
}

#[derive(Clone)]
pub struct ScrollSubject {
    observers: Arc<Mutex<Vec<ObserverRef>>>
}

impl ScrollSubject {
    pub fn new() -> ScrollSubject {
        ScrollSubject {
            observers: Arc::new(Mutex::new(vec![]))
        }
    }

    /* No de-duplication: subscribe twice, get notified twice. */
    pub fn subscribe(&self, observer: &ObserverRef) {
        lock!(self.observers).push(observer.clone());
    }

    pub fn unsubscribe(&self, observer: &ObserverRef) -> usize {
        let mut observers = lock!(self.observers);
        let before = observers.len();
        observers.retain(|x| !x.same(observer));
        before - observers.len()
    }

    pub fn len(&self) -> usize { lock!(self.observers).len() }

    /* Observers run in subscription order over a snapshot of the list, so one may (un)subscribe during a
     * notification without upsetting the rest of it. A failing observer doesn't stop the others: the failures
     * come back to the caller.
     */
    pub fn notify(&self, metrics: &ScrollMetrics) -> Vec<Message> {
        let snapshot = lock!(self.observers).clone();
        let mut failures = vec![];
        for observer in snapshot.iter() {
            if let Err(e) = observer.update(metrics) {
                failures.push(e);
            }
        }
        failures
    }
}
