//! Timestamped observations.

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// One immutable `(timestamp, value)` observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: Timestamp,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: Timestamp, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// True when this sample falls before `cutoff`.
    pub fn is_before(&self, cutoff: Timestamp) -> bool {
        self.timestamp < cutoff
    }
}

impl From<Sample> for (Timestamp, f64) {
    fn from(s: Sample) -> Self {
        (s.timestamp, s.value)
    }
}
