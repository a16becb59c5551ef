//! invite-ui - view components for the invitation site
//!
//! Pure, props-based views plus the page store. Wiring to the datastore and
//! timers lives in invite-web.

pub mod components;
pub mod stores;

pub use components::*;
