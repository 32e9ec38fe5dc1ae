//! Bookkeeping for the auto-clearing status message.

use tokio::task::AbortHandle;

/// Tracks which status message is current and the timer that will clear it.
///
/// Every new message (and every action that wipes the message) bumps the
/// generation and aborts the previous timer. A timer that already woke up
/// still checks `is_current` before clearing, so it can never clear a
/// newer message.
#[derive(Debug, Default)]
pub(crate) struct NoticeSlot {
    generation: u64,
    pending: Option<AbortHandle>,
}

impl NoticeSlot {
    pub(crate) fn bump(&mut self) -> u64 {
        if let Some(timer) = self.pending.take() {
            timer.abort();
        }
        self.generation += 1;
        self.generation
    }

    pub(crate) fn track(&mut self, timer: AbortHandle) {
        self.pending = Some(timer);
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}
