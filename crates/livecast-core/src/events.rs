use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

/// Events emitted to UI listeners while a room session is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The primary broadcaster changed; `None` means no host is online.
    HostChanged(Option<String>),
    MemberCountChanged(usize),
}

/// Trait for receiving events from the core.
/// Implementations must be Send + Sync (called from tokio tasks).
pub trait SessionEventListener: Send + Sync {
    fn on_event(&self, event: SessionEvent);
}

type ListenerMap = RwLock<HashMap<u64, Arc<dyn SessionEventListener>>>;

/// Internal event emitter that dispatches to registered listeners.
///
/// Registration returns a [`Subscription`] handle and dropping the handle
/// removes the listener, so a remounted room view cannot leave a stale
/// registration behind.
#[derive(Clone)]
pub struct EventEmitter {
    listeners: Arc<ListenerMap>,
    next_id: Arc<AtomicU64>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn subscribe(&self, listener: Arc<dyn SessionEventListener>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.write().unwrap().insert(id, listener);
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    pub fn emit(&self, event: SessionEvent) {
        let listeners = self.listeners.read().unwrap();
        for listener in listeners.values() {
            listener.on_event(event.clone());
        }
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for one listener registration. Dropping it deregisters.
pub struct Subscription {
    id: u64,
    listeners: Weak<ListenerMap>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.write().unwrap().remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    struct CountingListener {
        count: Arc<AtomicUsize>,
    }

    impl SessionEventListener for CountingListener {
        fn on_event(&self, _event: SessionEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn emitter_dispatches_to_listener() {
        let emitter = EventEmitter::new();
        let count = Arc::new(AtomicUsize::new(0));
        let _sub = emitter.subscribe(Arc::new(CountingListener { count: count.clone() }));

        emitter.emit(SessionEvent::MemberCountChanged(2));

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn emitter_dispatches_to_multiple_listeners() {
        let emitter = EventEmitter::new();
        let count1 = Arc::new(AtomicUsize::new(0));
        let count2 = Arc::new(AtomicUsize::new(0));

        let _sub1 = emitter.subscribe(Arc::new(CountingListener { count: count1.clone() }));
        let _sub2 = emitter.subscribe(Arc::new(CountingListener { count: count2.clone() }));

        emitter.emit(SessionEvent::HostChanged(None));

        assert_eq!(count1.load(Ordering::SeqCst), 1);
        assert_eq!(count2.load(Ordering::SeqCst), 1);
    }

    struct EventCapture {
        events: Arc<Mutex<Vec<SessionEvent>>>,
    }

    impl SessionEventListener for EventCapture {
        fn on_event(&self, event: SessionEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn emitter_delivers_correct_events() {
        let emitter = EventEmitter::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let _sub = emitter.subscribe(Arc::new(EventCapture { events: events.clone() }));

        emitter.emit(SessionEvent::HostChanged(Some("p1".to_string())));

        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0], SessionEvent::HostChanged(Some("p1".to_string())));
    }

    #[test]
    fn dropping_the_subscription_deregisters() {
        let emitter = EventEmitter::new();
        let count = Arc::new(AtomicUsize::new(0));
        let sub = emitter.subscribe(Arc::new(CountingListener { count: count.clone() }));

        emitter.emit(SessionEvent::MemberCountChanged(1));
        drop(sub);
        emitter.emit(SessionEvent::MemberCountChanged(2));

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn remounting_does_not_leak_registrations() {
        let emitter = EventEmitter::new();
        let count = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let sub = emitter.subscribe(Arc::new(CountingListener { count: count.clone() }));
            drop(sub);
        }
        let _sub = emitter.subscribe(Arc::new(CountingListener { count: count.clone() }));

        emitter.emit(SessionEvent::MemberCountChanged(1));

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
