//! State coordinator: the single task that owns every counter and series.
//!
//! Requests arrive through one mailbox and are applied strictly one at a
//! time, which is the only synchronization the store needs.

mod command;
mod mailbox;
mod state;

pub(crate) use command::Command;
pub(crate) use mailbox::{mailbox, MailboxTx, Rejected};
pub(crate) use state::Coordinator;
