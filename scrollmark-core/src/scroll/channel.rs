use scrollmark_toolkit::plumbing::distributor::Distributor;

#[derive(Debug,PartialEq,Eq)]
pub struct Subscription(u64);

/* A named, synchronous, in-process signal. Every handler registered at the time of a dispatch has run by the
 * time dispatch returns. A handler may subscribe or unsubscribe on its own channel; that counts from the next
 * dispatch.
 */
pub struct NotificationChannel<T> {
    name: String,
    distributor: Distributor<T>
}

impl<T> Clone for NotificationChannel<T> {
    fn clone(&self) -> Self {
        NotificationChannel {
            name: self.name.clone(),
            distributor: self.distributor.clone()
        }
    }
}

impl<T> NotificationChannel<T> {
    pub fn new(name: &str) -> NotificationChannel<T> {
        NotificationChannel {
            name: name.to_string(),
            distributor: Distributor::new()
        }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn dispatch(&self, payload: T) {
        self.distributor.send(payload);
    }

    pub fn subscribe<F>(&self, handler: F) -> Subscription where F: FnMut(&T) + 'static {
        Subscription(self.distributor.add(handler))
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.distributor.remove(subscription.0)
    }

    pub fn listeners(&self) -> usize { self.distributor.len() }
}

#[cfg(test)]
mod test {
    use std::sync::{ Arc, Mutex };
    use super::NotificationChannel;

    #[test]
    fn test_dispatch_reaches_all() {
        let seen = Arc::new(Mutex::new(vec![]));
        let channel = NotificationChannel::new("test");
        for tag in &["first","second"] {
            let seen = seen.clone();
            let tag = tag.to_string();
            channel.subscribe(move |v: &u32| seen.lock().unwrap().push(format!("{}:{}",tag,v)));
        }
        channel.dispatch(50);
        assert_eq!(vec!["first:50".to_string(),"second:50".to_string()],*seen.lock().unwrap());
        assert_eq!("test",channel.name());
    }

    #[test]
    fn test_unsubscribe() {
        let count = Arc::new(Mutex::new(0));
        let channel = NotificationChannel::new("test");
        let count2 = count.clone();
        let sub = channel.subscribe(move |_: &u32| *count2.lock().unwrap() += 1);
        let other = channel.clone();
        other.dispatch(25);
        assert_eq!(1,channel.listeners());
        assert!(channel.unsubscribe(sub));
        other.dispatch(25);
        assert_eq!(1,*count.lock().unwrap());
        assert_eq!(0,other.listeners());
    }

    #[test]
    fn test_unsubscribe_from_handler() {
        let count = Arc::new(Mutex::new(0));
        let channel = NotificationChannel::new("test");
        let subscription = Arc::new(Mutex::new(None));
        let (channel2,subscription2,count2) = (channel.clone(),subscription.clone(),count.clone());
        *subscription.lock().unwrap() = Some(channel.subscribe(move |_: &u32| {
            *count2.lock().unwrap() += 1;
            if let Some(s) = subscription2.lock().unwrap().take() {
                channel2.unsubscribe(s);
            }
        }));
        channel.dispatch(1);
        channel.dispatch(2);
        assert_eq!(1,*count.lock().unwrap());
        assert_eq!(0,channel.listeners());
    }
}
