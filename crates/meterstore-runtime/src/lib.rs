//! meterstore runtime: the coordinator task and the public store handle.
//!
//! This crate wires the core primitives into a single-writer store: one
//! Tokio task owns every counter and series, and `Store` handles talk to it
//! through a mailbox. Config loading lives here as well.

pub mod config;
pub mod store;

mod coordinator;

pub use config::StoreConfig;
pub use store::{Counters, Series, Store};
