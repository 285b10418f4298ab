//! Listener traits and the output subscription registry.

use std::fmt;

use super::evaluator::EvalError;

/// Receiver of single-predictor updates.
///
/// Implemented by [`super::ForestEvaluator`]; the hook mutates one
/// predictor, recomputes, notifies subscribers, and returns the newly
/// computed aggregate output.
pub trait InputChangeListener {
    fn on_input_change(&mut self, index: usize, value: f64) -> Result<f64, EvalError>;
}

/// Receiver of aggregate-output updates.
pub trait OutputChangeListener {
    /// Called synchronously with every newly computed aggregate output.
    ///
    /// Listeners run in subscription order on the caller's thread; a slow
    /// listener stalls the whole change pipeline. A panic here unwinds out
    /// of the triggering input change and aborts the remaining fan-out.
    fn on_output_change(&mut self, new_value: f64);
}

/// Opaque handle identifying one subscription.
///
/// Handles are never reused within a registry, so a stale handle is
/// detected by [`SubscriberRegistry::unsubscribe`] rather than removing
/// someone else's subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered registry of output listeners.
///
/// Subscriptions are notified in subscription order and never deduplicated:
/// the same listener subscribed twice is notified twice per change.
#[derive(Default)]
pub struct SubscriberRegistry {
    entries: Vec<(SubscriptionId, Box<dyn OutputChangeListener>)>,
    next_id: u64,
}

impl SubscriberRegistry {
    /// Append a listener; returns the handle for later removal.
    pub fn subscribe(&mut self, listener: Box<dyn OutputChangeListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove a subscription, returning whether one was removed.
    ///
    /// Returns `false` for stale or unknown handles.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invoke every listener with `new_value`, in subscription order.
    pub fn notify(&mut self, new_value: f64) {
        for (_, listener) in self.entries.iter_mut() {
            listener.on_output_change(new_value);
        }
    }
}

impl fmt::Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every notified value, tagged so ordering across listeners
    /// is observable through a shared log.
    #[derive(Clone)]
    struct Recorder {
        tag: &'static str,
        log: Rc<RefCell<Vec<(&'static str, f64)>>>,
    }

    impl OutputChangeListener for Recorder {
        fn on_output_change(&mut self, new_value: f64) {
            self.log.borrow_mut().push((self.tag, new_value));
        }
    }

    #[test]
    fn notifies_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = SubscriberRegistry::default();
        registry.subscribe(Box::new(Recorder { tag: "a", log: Rc::clone(&log) }));
        registry.subscribe(Box::new(Recorder { tag: "b", log: Rc::clone(&log) }));

        registry.notify(1.5);
        assert_eq!(*log.borrow(), vec![("a", 1.5), ("b", 1.5)]);
    }

    #[test]
    fn duplicate_subscription_notified_twice() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let recorder = Recorder { tag: "a", log: Rc::clone(&log) };

        let mut registry = SubscriberRegistry::default();
        registry.subscribe(Box::new(recorder.clone()));
        registry.subscribe(Box::new(recorder));

        registry.notify(2.0);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn unsubscribe_removes_and_detects_stale_handles() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = SubscriberRegistry::default();
        let a = registry.subscribe(Box::new(Recorder { tag: "a", log: Rc::clone(&log) }));
        let b = registry.subscribe(Box::new(Recorder { tag: "b", log: Rc::clone(&log) }));

        assert!(registry.unsubscribe(a));
        assert!(!registry.unsubscribe(a), "handle is stale after removal");
        assert_eq!(registry.len(), 1);

        registry.notify(3.0);
        assert_eq!(*log.borrow(), vec![("b", 3.0)]);

        assert!(registry.unsubscribe(b));
        assert!(registry.is_empty());
    }
}
