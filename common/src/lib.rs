//! Shared, browser-independent core of the academic records dashboard.
//!
//! Everything the views need that does not touch the DOM lives here:
//! the record models served by the results API, the client that talks to it
//! (generic over a [`api::Transport`]), the derived metrics shown in the
//! summary cards, the filter/sort engine behind every table, and the fetch
//! state machine each view keeps per panel.

pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod grades;
pub mod metrics;
pub mod model;
pub mod query;
pub mod tables;
pub mod validation;
pub mod view_state;
