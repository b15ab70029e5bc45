//! Unidirectional data flow primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Dispatcher ──→ Reducer ──→ Store ──→ listeners
//!    ↑                                              │
//!    └──────────── actions (network, form) ─────────┘
//! ```
//!
//! - **Action**: closed set of events, the only way state changes
//! - **Dispatcher**: synchronous fan-out to every subscribed store
//! - **Reducer**: pure function producing the next state
//! - **Store**: holds the current snapshot and notifies listeners

mod action;
mod dispatcher;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use dispatcher::{DispatchToken, Dispatcher};
pub use reducer::Reducer;
pub use state::StoreState;
pub use store::{ListenerToken, Store};
