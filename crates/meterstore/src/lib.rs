//! Top-level facade crate for meterstore.
//!
//! Re-exports core primitives and the runtime store so users can depend on a single crate.

pub mod core {
    pub use meterstore_core::*;
}

pub mod runtime {
    pub use meterstore_runtime::*;
}

pub use meterstore_core::{MeterError, Result};
pub use meterstore_runtime::{Store, StoreConfig};
