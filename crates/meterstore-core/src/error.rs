//! Shared error type across meterstore crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, MeterError>;

/// Unified error type used by core and runtime.
///
/// Metric operations themselves are total; these variants cover the
/// coordinator plumbing and configuration loading.
#[derive(Debug, Error)]
pub enum MeterError {
    #[error("store coordinator is closed")]
    CoordinatorClosed,
    #[error("store coordinator dropped the reply")]
    ReplyDropped,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MeterError {
    /// True when the coordinator is gone and the store must be re-created.
    pub fn is_closed(&self) -> bool {
        matches!(self, MeterError::CoordinatorClosed | MeterError::ReplyDropped)
    }
}
