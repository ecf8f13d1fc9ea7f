//! Store config loader (strict parsing).

pub mod schema;

use std::fs;

use meterstore_core::error::{MeterError, Result};

pub use schema::{StoreConfig, StoreSection};

pub fn load_from_file(path: &str) -> Result<StoreConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MeterError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<StoreConfig> {
    let cfg: StoreConfig = serde_yaml::from_str(s)
        .map_err(|e| MeterError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
