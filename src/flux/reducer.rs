//! Reducer trait for stores.

use super::action::Action;
use super::state::StoreState;

/// Reducer transforms state based on dispatched actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> Option<State>
pub trait Reducer: Send + Sync + 'static {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// Process an action and return the new state.
    ///
    /// Returns `None` for actions this reducer does not handle, and for
    /// payloads it cannot apply (e.g. an out-of-range row index). The store
    /// then keeps its current snapshot and emits nothing.
    fn reduce(state: &Self::State, action: &Action) -> Option<Self::State>;
}
