//! Coordinator mailbox with an explicit backpressure policy.
//!
//! - Unbounded: every request is queued; memory grows if producers outpace
//!   the coordinator.
//! - Bounded: `send` waits for capacity, `try_send` rejects when full so
//!   fire-and-forget callers can drop instead of blocking.

use tokio::sync::mpsc;

use meterstore_core::error::{MeterError, Result};

use super::Command;

#[derive(Clone)]
pub(crate) enum MailboxTx {
    Unbounded(mpsc::UnboundedSender<Command>),
    Bounded(mpsc::Sender<Command>),
}

pub(crate) enum MailboxRx {
    Unbounded(mpsc::UnboundedReceiver<Command>),
    Bounded(mpsc::Receiver<Command>),
}

/// Why a non-waiting send did not enqueue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejected {
    Full,
    Closed,
}

pub(crate) fn mailbox(capacity: Option<usize>) -> (MailboxTx, MailboxRx) {
    match capacity {
        Some(cap) => {
            let (tx, rx) = mpsc::channel(cap);
            (MailboxTx::Bounded(tx), MailboxRx::Bounded(rx))
        }
        None => {
            let (tx, rx) = mpsc::unbounded_channel();
            (MailboxTx::Unbounded(tx), MailboxRx::Unbounded(rx))
        }
    }
}

impl MailboxTx {
    /// Enqueue, waiting for capacity on a bounded mailbox.
    pub(crate) async fn send(&self, cmd: Command) -> Result<()> {
        match self {
            MailboxTx::Unbounded(tx) => tx.send(cmd).map_err(|_| MeterError::CoordinatorClosed),
            MailboxTx::Bounded(tx) => tx.send(cmd).await.map_err(|_| MeterError::CoordinatorClosed),
        }
    }

    /// Enqueue without waiting.
    pub(crate) fn try_send(&self, cmd: Command) -> std::result::Result<(), Rejected> {
        match self {
            MailboxTx::Unbounded(tx) => tx.send(cmd).map_err(|_| Rejected::Closed),
            MailboxTx::Bounded(tx) => tx.try_send(cmd).map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => Rejected::Full,
                mpsc::error::TrySendError::Closed(_) => Rejected::Closed,
            }),
        }
    }
}

impl MailboxRx {
    pub(crate) async fn recv(&mut self) -> Option<Command> {
        match self {
            MailboxRx::Unbounded(rx) => rx.recv().await,
            MailboxRx::Bounded(rx) => rx.recv().await,
        }
    }
}
