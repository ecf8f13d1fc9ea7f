use std::collections::HashMap;

use tokio::sync::oneshot;

use meterstore_core::Timestamp;

/// Newest-first `(timestamp, value)` pairs of one series.
pub(crate) type SeriesSnapshot = Vec<(Timestamp, f64)>;

/// One request to the coordinator.
///
/// Variants carrying `reply` are synchronous; the rest are fire-and-forget.
pub(crate) enum Command {
    CounterAll {
        reply: oneshot::Sender<HashMap<String, i64>>,
    },
    CounterGet {
        name: String,
        reply: oneshot::Sender<Option<i64>>,
    },
    CounterSet {
        name: String,
        value: i64,
        reply: oneshot::Sender<()>,
    },
    CounterIncr {
        name: String,
        by: i64,
        reply: oneshot::Sender<()>,
    },
    CounterDecr {
        name: String,
        by: i64,
        reply: oneshot::Sender<()>,
    },
    CounterClear {
        name: Option<String>,
        reply: oneshot::Sender<()>,
    },
    SeriesAll {
        reply: oneshot::Sender<HashMap<String, SeriesSnapshot>>,
    },
    SeriesGet {
        name: String,
        reply: oneshot::Sender<Option<SeriesSnapshot>>,
    },
    SeriesSample {
        name: String,
        value: f64,
    },
    SeriesClear {
        name: Option<String>,
    },
    SeriesPrune {
        name: Option<String>,
    },
}

impl Command {
    /// Short label for logs.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Command::CounterAll { .. } => "counter.all",
            Command::CounterGet { .. } => "counter.get",
            Command::CounterSet { .. } => "counter.set",
            Command::CounterIncr { .. } => "counter.incr",
            Command::CounterDecr { .. } => "counter.decr",
            Command::CounterClear { .. } => "counter.clear",
            Command::SeriesAll { .. } => "series.all",
            Command::SeriesGet { .. } => "series.get",
            Command::SeriesSample { .. } => "series.sample",
            Command::SeriesClear { .. } => "series.clear",
            Command::SeriesPrune { .. } => "series.prune",
        }
    }
}
