//! Observable state container driven by a [`Reducer`].

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::action::Action;
use super::dispatcher::Dispatcher;
use super::reducer::Reducer;

/// Handle returned by [`Store::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

type ChangeListener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Holds the current snapshot for reducer `R`.
///
/// The snapshot is replaced, never mutated, and only from inside the
/// dispatcher callback installed by [`Store::register`]. Listeners are
/// notified after the swap, so any `get_state` they make sees the complete
/// new snapshot.
pub struct Store<R: Reducer> {
    state: RwLock<Arc<R::State>>,
    listeners: Mutex<Vec<(ListenerToken, ChangeListener<R::State>)>>,
    next_listener: AtomicU64,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Store<R> {
    /// Create an unregistered store holding the default state.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(Arc::new(R::State::default())),
            listeners: Mutex::new(Vec::new()),
            next_listener: AtomicU64::new(1),
            _reducer: PhantomData,
        }
    }

    /// Create a store and subscribe it to `dispatcher`.
    ///
    /// The subscription holds a weak reference; dropping the last `Arc`
    /// turns the callback into a no-op.
    pub fn register(dispatcher: &Dispatcher) -> Arc<Self> {
        let store = Arc::new(Self::new());
        let weak = Arc::downgrade(&store);
        dispatcher.subscribe(move |action| {
            if let Some(store) = weak.upgrade() {
                store.on_dispatch(action);
            }
        });
        store
    }

    /// Current snapshot.
    pub fn get_state(&self) -> Arc<R::State> {
        self.state.read().clone()
    }

    /// Register a change listener, called with the new snapshot.
    pub fn add_listener<F>(&self, listener: F) -> ListenerToken
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        let token = ListenerToken(self.next_listener.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((token, Arc::new(listener)));
        token
    }

    pub fn remove_listener(&self, token: ListenerToken) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(t, _)| *t != token);
        listeners.len() != before
    }

    fn on_dispatch(&self, action: &Action) {
        let next = {
            let mut state = self.state.write();
            match R::reduce(state.as_ref(), action) {
                Some(next) => {
                    let next = Arc::new(next);
                    *state = Arc::clone(&next);
                    next
                }
                None => return,
            }
        };

        self.emit_change(&next);
    }

    fn emit_change(&self, state: &R::State) {
        let listeners: Vec<ChangeListener<R::State>> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flux::StoreState;
    use std::sync::atomic::AtomicUsize;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct CounterState {
        validations: usize,
    }

    impl StoreState for CounterState {}

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = CounterState;

        fn reduce(state: &Self::State, action: &Action) -> Option<Self::State> {
            match action {
                Action::ValidateForm => Some(CounterState {
                    validations: state.validations + 1,
                }),
                _ => None,
            }
        }
    }

    #[test]
    fn recognized_action_replaces_snapshot_and_notifies() {
        let dispatcher = Dispatcher::new();
        let store = Store::<CounterReducer>::register(&dispatcher);
        let notified = Arc::new(AtomicUsize::new(0));

        let counter = notified.clone();
        store.add_listener(move |state| {
            counter.store(state.validations, Ordering::SeqCst);
        });

        let before = store.get_state();
        dispatcher.dispatch(&Action::ValidateForm);
        let after = store.get_state();

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before.validations, 0);
        assert_eq!(after.validations, 1);
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unrecognized_action_keeps_identical_snapshot() {
        let dispatcher = Dispatcher::new();
        let store = Store::<CounterReducer>::register(&dispatcher);
        let notified = Arc::new(AtomicUsize::new(0));

        let counter = notified.clone();
        store.add_listener(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let before = store.get_state();
        dispatcher.dispatch(&Action::ClearForm);

        assert!(Arc::ptr_eq(&before, &store.get_state()));
        assert_eq!(notified.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn listener_sees_complete_snapshot_via_get_state() {
        let dispatcher = Dispatcher::new();
        let store = Store::<CounterReducer>::register(&dispatcher);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let weak = Arc::downgrade(&store);
        let log = seen.clone();
        store.add_listener(move |state| {
            if let Some(store) = weak.upgrade() {
                log.lock().push((state.validations, store.get_state().validations));
            }
        });

        dispatcher.dispatch(&Action::ValidateForm);
        dispatcher.dispatch(&Action::ValidateForm);

        assert_eq!(*seen.lock(), vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn removed_listener_is_silent() {
        let dispatcher = Dispatcher::new();
        let store = Store::<CounterReducer>::register(&dispatcher);
        let notified = Arc::new(AtomicUsize::new(0));

        let counter = notified.clone();
        let token = store.add_listener(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(store.remove_listener(token));

        dispatcher.dispatch(&Action::ValidateForm);
        assert_eq!(notified.load(Ordering::SeqCst), 0);
        assert_eq!(store.get_state().validations, 1);
    }

    #[test]
    fn dropped_store_ignores_dispatch() {
        let dispatcher = Dispatcher::new();
        let store = Store::<CounterReducer>::register(&dispatcher);
        drop(store);
        dispatcher.dispatch(&Action::ValidateForm);
    }
}
