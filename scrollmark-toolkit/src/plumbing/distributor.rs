use std::sync::{Arc, Mutex};
use crate::lock;

/* A Distributor fans a value out to every registered callback, in registration order, before send() returns.
 * Callbacks are identified by the id returned from add() so that they can be withdrawn again. send() works
 * from a snapshot: callbacks may add and remove callbacks, which takes effect from the next send().
 */

type Stream<T> = Arc<Mutex<Box<dyn FnMut(&T) + 'static>>>;

struct DistributorState<T> {
    next_id: u64,
    streams: Vec<(u64,Stream<T>)>
}

pub struct Distributor<T>(Arc<Mutex<DistributorState<T>>>);

impl<T> Clone for Distributor<T> {
    fn clone(&self) -> Self { Distributor(self.0.clone()) }
}

impl<T> Distributor<T> {
    pub fn new() -> Distributor<T> {
        Distributor(Arc::new(Mutex::new(DistributorState {
            next_id: 0,
            streams: vec![]
        })))
    }

    pub fn add<F>(&self, cb: F) -> u64 where F: FnMut(&T) + 'static {
        let mut state = lock!(self.0);
        let id = state.next_id;
        state.next_id += 1;
        state.streams.push((id,Arc::new(Mutex::new(Box::new(cb)))));
        id
    }

    pub fn remove(&self, id: u64) -> bool {
        let mut state = lock!(self.0);
        let before = state.streams.len();
        state.streams.retain(|(stream_id,_)| *stream_id != id);
        state.streams.len() != before
    }

    pub fn len(&self) -> usize { lock!(self.0).streams.len() }

    pub fn send(&self, value: T) {
        let streams = lock!(self.0).streams.iter().map(|(_,s)| s.clone()).collect::<Vec<_>>();
        for stream in streams.iter() {
            let mut stream = lock!(stream);
            (&mut *stream)(&value);
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::{ Arc, Mutex };
    use super::Distributor;

    #[test]
    fn test_distributor_order() {
        let seen = Arc::new(Mutex::new(vec![]));
        let distributor = Distributor::new();
        let seen2 = seen.clone();
        distributor.add(move |v: &u32| seen2.lock().unwrap().push(("a",*v)));
        let seen2 = seen.clone();
        distributor.add(move |v: &u32| seen2.lock().unwrap().push(("b",*v)));
        distributor.send(7);
        assert_eq!(vec![("a",7),("b",7)],*seen.lock().unwrap());
    }

    #[test]
    fn test_distributor_remove() {
        let count = Arc::new(Mutex::new(0));
        let distributor = Distributor::new();
        let count2 = count.clone();
        let id = distributor.add(move |_: &()| *count2.lock().unwrap() += 1);
        distributor.send(());
        assert!(distributor.remove(id));
        assert!(!distributor.remove(id));
        distributor.send(());
        assert_eq!(1,*count.lock().unwrap());
        assert_eq!(0,distributor.len());
    }

    #[test]
    fn test_distributor_change_during_send() {
        let seen = Arc::new(Mutex::new(vec![]));
        let distributor = Distributor::new();
        let id = Arc::new(Mutex::new(None));
        let (distributor2,id2,seen2) = (distributor.clone(),id.clone(),seen.clone());
        *id.lock().unwrap() = Some(distributor.add(move |v: &u32| {
            seen2.lock().unwrap().push(("once",*v));
            if let Some(id) = id2.lock().unwrap().take() {
                distributor2.remove(id);
            }
            let seen3 = seen2.clone();
            distributor2.add(move |v: &u32| seen3.lock().unwrap().push(("late",*v)));
        }));
        distributor.send(1);
        assert_eq!(vec![("once",1)],*seen.lock().unwrap());
        assert_eq!(1,distributor.len());
        distributor.send(2);
        assert_eq!(vec![("once",1),("late",2)],*seen.lock().unwrap());
    }
}
