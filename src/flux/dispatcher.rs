//! Synchronous action bus.

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};

use super::action::Action;

/// Handle returned by [`Dispatcher::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DispatchToken(u64);

type Listener = Arc<dyn Fn(&Action) + Send + Sync>;

/// Fans every action out to all subscribed listeners, in subscription order.
///
/// Dispatch is synchronous: when `dispatch` returns, every listener has
/// processed the action. Dispatching from inside a listener panics. Calls
/// from different threads are serialized, so fetch groups running on
/// separate workers never interleave inside a dispatch.
pub struct Dispatcher {
    listeners: Mutex<Vec<(DispatchToken, Listener)>>,
    next_token: AtomicU64,
    /// Held for the whole dispatch; re-entrant so a nested call on the same
    /// thread reaches the flag check instead of deadlocking.
    in_dispatch: ReentrantMutex<Cell<bool>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            next_token: AtomicU64::new(1),
            in_dispatch: ReentrantMutex::new(Cell::new(false)),
        }
    }

    /// Register a listener invoked for every dispatched action.
    pub fn subscribe<F>(&self, listener: F) -> DispatchToken
    where
        F: Fn(&Action) + Send + Sync + 'static,
    {
        let token = DispatchToken(self.next_token.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((token, Arc::new(listener)));
        token
    }

    /// Remove a listener. Returns false if the token was not registered.
    pub fn unsubscribe(&self, token: DispatchToken) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(t, _)| *t != token);
        listeners.len() != before
    }

    /// Deliver `action` to every listener subscribed when dispatch starts.
    ///
    /// # Panics
    /// Panics when called from inside a listener of this dispatcher.
    pub fn dispatch(&self, action: &Action) {
        let guard = self.in_dispatch.lock();
        assert!(
            !guard.get(),
            "Cannot dispatch in the middle of a dispatch. (attempted {})",
            action.kind()
        );
        guard.set(true);
        let _reset = scopeguard::guard(&*guard, |flag| flag.set(false));

        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::trace!(kind = action.kind(), listeners = listeners.len(), "Dispatch");

        for listener in listeners {
            listener(action);
        }
    }

    /// Whether a dispatch is running on the calling thread.
    pub fn is_dispatching(&self) -> bool {
        self.in_dispatch
            .try_lock()
            .is_some_and(|flag| flag.get())
    }
}
