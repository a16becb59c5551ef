//! invite-core - configuration and datastore access for the invitation site
//!
//! Everything here compiles for both wasm32 (the site) and native (tests).

pub mod config;
pub mod datastore;
pub mod timing;
