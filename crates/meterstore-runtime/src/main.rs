//! meterstore demo host.
//!
//! - Config: `meterstore.yaml`, or the path in `METERSTORE_CONFIG`
//! - Records a few timed computations and counter bumps
//! - Logs the resulting snapshot, then shuts the coordinator down

use tracing_subscriber::{fmt, EnvFilter};

use meterstore_core::error::{MeterError, Result};
use meterstore_runtime::{config, Store, StoreConfig};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var("METERSTORE_CONFIG").unwrap_or_else(|_| "meterstore.yaml".into());
    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        // missing/unreadable file only; a bad file is fatal
        Err(MeterError::Internal(e)) => {
            tracing::warn!(%path, error = %e, "config not readable; using defaults");
            StoreConfig::default()
        }
        Err(e) => {
            tracing::error!(%path, error = %e, "config rejected");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cfg).await {
        tracing::error!(error = %e, "demo failed");
        std::process::exit(1);
    }
}

async fn run(cfg: &StoreConfig) -> Result<()> {
    let (store, coordinator) = Store::spawn(cfg)?;
    tracing::info!(retention_ms = cfg.store.retention_ms, "meterstore demo starting");

    let counters = store.counters();
    let series = store.series();

    for round in 0..5u64 {
        let total = series.time("demo.sum_micros", || (0..=10_000 * (round + 1)).sum::<u64>());
        series.sample("demo.sum_result", total as f64);
        counters.incr("demo.rounds").await?;
    }
    counters.incr_by("demo.items", 42).await?;
    counters.decr("demo.items").await?;

    for (name, value) in counters.all().await? {
        tracing::info!(counter = %name, value, "counter");
    }
    for (name, samples) in series.all().await? {
        let newest = samples.first().map(|(_, v)| *v);
        tracing::info!(series = %name, samples = samples.len(), ?newest, "series");
    }

    drop(store);
    coordinator
        .await
        .map_err(|e| MeterError::Internal(format!("coordinator task failed: {e}")))?;
    Ok(())
}
