//! In-process publish/subscribe bus
//!
//! `EventBus<T>` replaces ambient global dispatch: whoever needs to emit or
//! observe an event gets a clone of the bus handed to it. Clones share the
//! same listener registry.
//!
//! Listeners run synchronously inside `publish`, in subscription order. The
//! registry lock is released before any listener runs, so listeners may
//! publish, subscribe or unsubscribe on the same bus.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    listeners: Mutex<Vec<(SubscriptionId, Listener<T>)>>,
    next_id: AtomicU64,
}

/// Shared handle to a listener registry for events of type `T`
pub struct EventBus<T> {
    inner: Arc<Registry<T>>,
}

impl<T> EventBus<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Registry {
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Listener<T>)>> {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a listener; it receives every event published from now on
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners();
        let before = listeners.len();
        listeners.retain(|(sub, _)| *sub != id);
        listeners.len() != before
    }

    /// Deliver `event` to every current listener, returning how many ran
    pub fn publish(&self, event: &T) -> usize {
        let snapshot: Vec<Listener<T>> = self
            .listeners()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in &snapshot {
            listener(event);
        }
        snapshot.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners().len()
    }

    /// Whether two handles point at the same registry
    pub fn same_bus(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
