//! Store types for page UI state
//!
//! Each store derives `Store` for fine-grained reactivity via lensing.

pub mod invite;

pub use invite::*;
