//! meterstore core: runtime-free metric primitives, clock seam, and errors.
//!
//! This crate defines the data structures owned by the store coordinator:
//! the sliding-window time series and the counter table. Neither type does
//! any synchronization of its own; callers serialize access (the runtime
//! crate does so with a single coordinator task).
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod counter;
pub mod error;
pub mod sample;
pub mod window;

pub use clock::{Clock, ManualClock, SystemClock};
pub use counter::CounterTable;
/// Shared result type.
pub use error::{MeterError, Result};
pub use sample::{Sample, Timestamp};
pub use window::SlidingWindow;
