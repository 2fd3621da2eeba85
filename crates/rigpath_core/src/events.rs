//! Hierarchy change notifications.
//!
//! The host raises an edge-triggered, payload-free [`HierarchyChanged`] event
//! after any structural mutation. Instead of invoking callbacks in place
//! (which would let a handler mutate the scene while it is still being
//! mutated), every subscriber owns the receiving end of a `flume` channel and
//! drains it at a point of its choosing.
//!
//! ```rust,ignore
//! let mut notifier = HierarchyNotifier::new();
//! let listener = notifier.subscribe();
//!
//! notifier.notify();
//! notifier.notify();
//! assert_eq!(listener.drain(), 2);
//! ```

use flume::{Receiver, Sender};

/// Marker event: "some hierarchy changed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HierarchyChanged;

/// Sending side, owned by the host scene.
#[derive(Debug, Default)]
pub struct HierarchyNotifier {
    subscribers: Vec<Sender<HierarchyChanged>>,
}

impl HierarchyNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new listener.
    pub fn subscribe(&mut self) -> HierarchyListener {
        let (tx, rx) = flume::unbounded();
        self.subscribers.push(tx);
        HierarchyListener { rx }
    }

    /// Delivers one event to every live subscriber.
    ///
    /// Subscribers whose listener was dropped are pruned.
    pub fn notify(&mut self) {
        self.subscribers
            .retain(|tx| tx.send(HierarchyChanged).is_ok());
    }

    /// Number of registered (not yet pruned) subscribers.
    #[inline]
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Receiving side of a hierarchy subscription.
///
/// Dropping the listener unsubscribes it.
#[derive(Debug)]
pub struct HierarchyListener {
    rx: Receiver<HierarchyChanged>,
}

impl HierarchyListener {
    /// Consumes every queued event and returns how many there were.
    ///
    /// Bursts of mutations collapse into one drain, so the consumer runs a
    /// single cycle for them.
    pub fn drain(&self) -> usize {
        self.rx.try_iter().count()
    }

    /// Number of events currently queued.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    #[inline]
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.rx.is_empty()
    }
}
