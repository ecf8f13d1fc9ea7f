//! Public store handle.
//!
//! `Store` is a cheap, cloneable sender into the coordinator mailbox.
//! Instantiate it once and pass clones to every caller; dropping the last
//! clone stops the coordinator.
//!
//! Synchronous calls (`counters()` and series reads) await the coordinator's
//! reply. Series `clear` waits only until the request is enqueued.
//! Fire-and-forget calls (`sample`, `prune`) never wait and are dropped when
//! a bounded mailbox is full. Requests from one handle are applied in the
//! order issued.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use meterstore_core::error::{MeterError, Result};
use meterstore_core::{Clock, SystemClock, Timestamp};

use crate::config::StoreConfig;
use crate::coordinator::{mailbox, Command, Coordinator, MailboxTx, Rejected};

#[derive(Clone)]
pub struct Store {
    tx: MailboxTx,
    dropped: Arc<AtomicU64>,
}

impl Store {
    /// Spawn a coordinator on the current Tokio runtime, stamping samples
    /// with the wall clock.
    pub fn spawn(cfg: &StoreConfig) -> Result<(Self, JoinHandle<()>)> {
        Self::spawn_with_clock(cfg, Arc::new(SystemClock))
    }

    /// Fails with `InvalidConfig` before spawning anything if `cfg` does not
    /// pass `StoreConfig::validate`.
    pub fn spawn_with_clock(
        cfg: &StoreConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<(Self, JoinHandle<()>)> {
        cfg.validate()?;
        let (tx, rx) = mailbox(cfg.store.mailbox_capacity);
        let coordinator = Coordinator::new(cfg.store.retention(), clock);
        let handle = tokio::spawn(coordinator.run(rx));
        let store = Self {
            tx,
            dropped: Arc::new(AtomicU64::new(0)),
        };
        Ok((store, handle))
    }

    pub fn counters(&self) -> Counters<'_> {
        Counters { store: self }
    }

    pub fn series(&self) -> Series<'_> {
        Series { store: self }
    }

    /// Fire-and-forget requests dropped because a bounded mailbox was full.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(build(reply)).await?;
        rx.await.map_err(|_| MeterError::ReplyDropped)
    }

    /// Enqueue without a reply, waiting for capacity on a bounded mailbox.
    async fn enqueue(&self, cmd: Command) {
        let kind = cmd.kind();
        if self.tx.send(cmd).await.is_err() {
            tracing::warn!(kind, "store coordinator closed; request dropped");
        }
    }

    fn notify(&self, cmd: Command) {
        let kind = cmd.kind();
        match self.tx.try_send(cmd) {
            Ok(()) => {}
            Err(Rejected::Full) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(kind, "store mailbox full; request dropped");
            }
            Err(Rejected::Closed) => {
                tracing::warn!(kind, "store coordinator closed; request dropped");
            }
        }
    }
}

/// Counter operations.
pub struct Counters<'a> {
    store: &'a Store,
}

impl Counters<'_> {
    /// Snapshot of every stored counter.
    pub async fn all(&self) -> Result<HashMap<String, i64>> {
        self.store.request(|reply| Command::CounterAll { reply }).await
    }

    /// `None` until the counter is first written.
    pub async fn get(&self, name: &str) -> Result<Option<i64>> {
        let name = name.to_string();
        self.store.request(|reply| Command::CounterGet { name, reply }).await
    }

    pub async fn set(&self, name: &str, value: i64) -> Result<()> {
        let name = name.to_string();
        self.store.request(|reply| Command::CounterSet { name, value, reply }).await
    }

    pub async fn incr(&self, name: &str) -> Result<()> {
        self.incr_by(name, 1).await
    }

    pub async fn incr_by(&self, name: &str, by: i64) -> Result<()> {
        let name = name.to_string();
        self.store.request(|reply| Command::CounterIncr { name, by, reply }).await
    }

    pub async fn decr(&self, name: &str) -> Result<()> {
        self.decr_by(name, 1).await
    }

    pub async fn decr_by(&self, name: &str, by: i64) -> Result<()> {
        let name = name.to_string();
        self.store.request(|reply| Command::CounterDecr { name, by, reply }).await
    }

    /// Remove every counter.
    pub async fn clear(&self) -> Result<()> {
        self.store.request(|reply| Command::CounterClear { name: None, reply }).await
    }

    /// Remove one counter; a missing name is a no-op.
    pub async fn clear_one(&self, name: &str) -> Result<()> {
        let name = Some(name.to_string());
        self.store.request(|reply| Command::CounterClear { name, reply }).await
    }
}

/// Time series operations.
pub struct Series<'a> {
    store: &'a Store,
}

impl Series<'_> {
    /// Every series, each newest-first.
    pub async fn all(&self) -> Result<HashMap<String, Vec<(Timestamp, f64)>>> {
        self.store.request(|reply| Command::SeriesAll { reply }).await
    }

    /// Newest-first samples, or `None` if `name` was never sampled.
    pub async fn get(&self, name: &str) -> Result<Option<Vec<(Timestamp, f64)>>> {
        let name = name.to_string();
        self.store.request(|reply| Command::SeriesGet { name, reply }).await
    }

    /// Record `value` stamped with the coordinator clock. Does not wait.
    pub fn sample(&self, name: &str, value: f64) {
        self.store.notify(Command::SeriesSample {
            name: name.to_string(),
            value,
        });
    }

    /// Remove every series. Waits for mailbox space, never for the
    /// coordinator to apply it; a full mailbox does not drop a clear.
    pub async fn clear(&self) {
        self.store.enqueue(Command::SeriesClear { name: None }).await;
    }

    /// Remove one series. Same delivery as [`Series::clear`].
    pub async fn clear_one(&self, name: &str) {
        self.store
            .enqueue(Command::SeriesClear {
                name: Some(name.to_string()),
            })
            .await;
    }

    /// Evict expired samples from one series without recording. Does not wait.
    pub fn prune(&self, name: &str) {
        self.store.notify(Command::SeriesPrune {
            name: Some(name.to_string()),
        });
    }

    /// Evict expired samples from every series. Does not wait.
    pub fn prune_all(&self) {
        self.store.notify(Command::SeriesPrune { name: None });
    }

    /// Run `f`, record its elapsed wall-clock time in microseconds under
    /// `name`, and hand back its result.
    pub fn time<T>(&self, name: &str, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let out = f();
        self.sample(name, micros(started.elapsed()));
        out
    }

    /// Async counterpart of [`Series::time`]; measures until `fut` resolves.
    pub async fn time_async<F: Future>(&self, name: &str, fut: F) -> F::Output {
        let started = Instant::now();
        let out = fut.await;
        self.sample(name, micros(started.elapsed()));
        out
    }
}

fn micros(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000_000.0
}
