use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use meterstore_core::{Clock, CounterTable, Sample, SlidingWindow};

use super::command::{Command, SeriesSnapshot};
use super::mailbox::MailboxRx;

/// Owner of the counter table and every named series.
pub(crate) struct Coordinator {
    counters: CounterTable,
    series: HashMap<String, SlidingWindow>,
    retention: Duration,
    clock: Arc<dyn Clock>,
}

impl Coordinator {
    pub(crate) fn new(retention: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            counters: CounterTable::new(),
            series: HashMap::new(),
            retention,
            clock,
        }
    }

    /// Drain the mailbox until every sender is gone.
    pub(crate) async fn run(mut self, mut rx: MailboxRx) {
        let retention_ms = u64::try_from(self.retention.as_millis()).unwrap_or(u64::MAX);
        tracing::info!(retention_ms, "store coordinator started");
        while let Some(cmd) = rx.recv().await {
            tracing::trace!(kind = cmd.kind(), "command");
            self.apply(cmd);
        }
        tracing::info!(
            counters = self.counters.len(),
            series = self.series.len(),
            "store coordinator stopped (mailbox closed)"
        );
    }

    // Reply send failures mean the caller stopped waiting; nothing to undo.
    fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::CounterAll { reply } => {
                let _ = reply.send(self.counters.all());
            }
            Command::CounterGet { name, reply } => {
                let _ = reply.send(self.counters.get(&name));
            }
            Command::CounterSet { name, value, reply } => {
                if self.counters.set(&name, value) {
                    tracing::debug!(counter = %name, "counter created");
                }
                let _ = reply.send(());
            }
            Command::CounterIncr { name, by, reply } => {
                self.note_new_counter(&name);
                self.counters.incr_by(&name, by);
                let _ = reply.send(());
            }
            Command::CounterDecr { name, by, reply } => {
                self.note_new_counter(&name);
                self.counters.decr_by(&name, by);
                let _ = reply.send(());
            }
            Command::CounterClear { name, reply } => {
                match name {
                    Some(n) => self.counters.remove(&n),
                    None => self.counters.clear(),
                }
                let _ = reply.send(());
            }
            Command::SeriesAll { reply } => {
                let _ = reply.send(self.series_all());
            }
            Command::SeriesGet { name, reply } => {
                let _ = reply.send(self.series.get(&name).map(SlidingWindow::to_list));
            }
            Command::SeriesSample { name, value } => self.record(name, value),
            Command::SeriesClear { name } => match name {
                Some(n) => {
                    self.series.remove(&n);
                }
                None => self.series.clear(),
            },
            Command::SeriesPrune { name } => self.prune(name.as_deref()),
        }
    }

    fn note_new_counter(&self, name: &str) {
        if !self.counters.contains(name) {
            tracing::debug!(counter = %name, "counter created");
        }
    }

    fn record(&mut self, name: String, value: f64) {
        let now = self.clock.now();
        let sample = Sample::new(now, value);
        match self.series.get_mut(&name) {
            Some(window) => {
                let evicted = window.push(sample, now);
                if evicted > 0 {
                    tracing::debug!(series = %name, evicted, kept = window.len(), "evicted expired samples");
                }
            }
            None => {
                tracing::debug!(series = %name, "series created");
                self.series
                    .insert(name, SlidingWindow::new(self.retention, sample, now));
            }
        }
    }

    fn prune(&mut self, name: Option<&str>) {
        let now = self.clock.now();
        match name {
            Some(n) => {
                if let Some(window) = self.series.get_mut(n) {
                    let evicted = window.prune(now);
                    tracing::debug!(series = %n, evicted, "pruned series");
                }
            }
            None => {
                let evicted: usize = self.series.values_mut().map(|w| w.prune(now)).sum();
                tracing::debug!(series = self.series.len(), evicted, "pruned all series");
            }
        }
    }

    fn series_all(&self) -> HashMap<String, SeriesSnapshot> {
        self.series
            .iter()
            .map(|(name, window)| (name.clone(), window.to_list()))
            .collect()
    }
}
