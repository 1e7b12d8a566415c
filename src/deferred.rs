//! Deferred step advance.
//!
//! A selection schedules a one-shot timer; when it fires, an [`AdvanceTicket`]
//! is delivered on the channel handed to [`DeferredAdvance::new`]. The event
//! loop turns the ticket back into an `on_next` call via
//! [`DeferredAdvance::claim`].
//!
//! At most one timer is pending at a time: scheduling again cancels the
//! previous timer first, and dropping the handle cancels whatever is pending.
//! A ticket that was already queued before its timer was replaced is rejected
//! by `claim`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::log;

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one scheduled advance. Unique for the whole process, so a
/// remounted picker never accepts a ticket from its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket(u64);

#[derive(Debug)]
struct Pending {
    ticket: AdvanceTicket,
    handle: JoinHandle<()>,
}

/// Owner of the pending advance timer.
#[derive(Debug)]
pub struct DeferredAdvance {
    delay: Duration,
    tx: mpsc::UnboundedSender<AdvanceTicket>,
    pending: Option<Pending>,
}

impl DeferredAdvance {
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<AdvanceTicket>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Start the timer, replacing any timer that is still pending.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self) -> AdvanceTicket {
        if self.cancel() {
            log::log_event("advance timer restarted");
        }

        let ticket = AdvanceTicket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed));
        let tx = self.tx.clone();
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone once the event loop has exited
            let _ = tx.send(ticket);
        });

        log::log_event(&format!(
            "advance {:?} scheduled in {}ms",
            ticket,
            delay.as_millis()
        ));
        self.pending = Some(Pending { ticket, handle });
        ticket
    }

    /// Abort the pending timer. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                pending.handle.abort();
                log::log_event(&format!("advance {:?} cancelled", pending.ticket));
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Accept a delivered ticket if it belongs to the pending timer.
    ///
    /// Returns `false` for tickets of cancelled or replaced timers.
    pub fn claim(&mut self, ticket: AdvanceTicket) -> bool {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                true
            }
            _ => {
                log::log_event(&format!("stale advance {:?} ignored", ticket));
                false
            }
        }
    }
}

impl Drop for DeferredAdvance {
    fn drop(&mut self) {
        self.cancel();
    }
}
