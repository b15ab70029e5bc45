//! Quarterly FOIA report data client.
//!
//! Form selections and reference data live in [`stores`], evolved by
//! reducers through a single [`flux::Dispatcher`]. [`actions::ReportActions`]
//! turns selections into JSON:API queries built by [`query`] and streams
//! paginated results back into the stores over a [`transport::Transport`].

pub mod actions;
pub mod config;
pub mod context;
pub mod flux;
pub mod logging;
pub mod query;
pub mod stores;
pub mod transport;
pub mod types;
