use std::time::Duration;

use serde::Deserialize;
use meterstore_core::error::{MeterError, Result};

const MAX_RETENTION_MS: u64 = 86_400_000;
const MAX_MAILBOX_CAPACITY: usize = 1_048_576;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    pub version: u32,

    #[serde(default)]
    pub store: StoreSection,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: 1,
            store: StoreSection::default(),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MeterError::InvalidConfig(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.store.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    /// Sliding window applied to every time series.
    #[serde(default = "default_retention_ms")]
    pub retention_ms: u64,

    /// `None` keeps the mailbox unbounded.
    #[serde(default)]
    pub mailbox_capacity: Option<usize>,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            retention_ms: default_retention_ms(),
            mailbox_capacity: None,
        }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_RETENTION_MS).contains(&self.retention_ms) {
            return Err(MeterError::InvalidConfig(format!(
                "store.retention_ms must be between 1 and {MAX_RETENTION_MS}"
            )));
        }
        if let Some(cap) = self.mailbox_capacity {
            if !(1..=MAX_MAILBOX_CAPACITY).contains(&cap) {
                return Err(MeterError::InvalidConfig(format!(
                    "store.mailbox_capacity must be between 1 and {MAX_MAILBOX_CAPACITY}"
                )));
            }
        }
        Ok(())
    }

    pub fn retention(&self) -> Duration {
        Duration::from_millis(self.retention_ms)
    }
}

// 5 minutes
fn default_retention_ms() -> u64 {
    300_000
}
