//! Generic async-operation status machine.
//!
//! One abstraction shared by every store and sub-operation instead of a
//! hand-rolled idle/loading/succeeded/failed copy per slice. Each `begin()`
//! issues a monotonically numbered ticket; a settlement only applies when
//! its ticket is still the latest, so when two dispatches overlap the
//! earlier response cannot overwrite the later one.

/// Lifecycle of an async operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AsyncStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Ticket identifying one dispatch of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpTicket(u64);

/// Status machine for one logical async operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AsyncOp {
    status: AsyncStatus,
    error: Option<String>,
    seq: u64,
}

impl AsyncOp {
    pub fn status(&self) -> AsyncStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == AsyncStatus::Loading
    }

    pub fn is_succeeded(&self) -> bool {
        self.status == AsyncStatus::Succeeded
    }

    pub fn is_failed(&self) -> bool {
        self.status == AsyncStatus::Failed
    }

    /// Enter `Loading`, clearing any prior error. Legal from any state:
    /// a retry re-enters loading from a terminal state.
    pub fn begin(&mut self) -> OpTicket {
        self.seq += 1;
        self.status = AsyncStatus::Loading;
        self.error = None;
        OpTicket(self.seq)
    }

    /// Whether `ticket` is the latest dispatch of this operation.
    pub fn is_current(&self, ticket: OpTicket) -> bool {
        ticket.0 == self.seq
    }

    /// Settle as succeeded. Returns false (no state change) when a newer
    /// dispatch has superseded this ticket.
    pub fn succeed(&mut self, ticket: OpTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = AsyncStatus::Succeeded;
        self.error = None;
        true
    }

    /// Settle as failed with a user-facing message. Stale tickets are
    /// discarded the same way as for `succeed`.
    pub fn fail(&mut self, ticket: OpTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = AsyncStatus::Failed;
        self.error = Some(message.into());
        true
    }

    /// Back to `Idle` with the error cleared. Does not invalidate in-flight
    /// tickets.
    pub fn reset(&mut self) {
        self.status = AsyncStatus::Idle;
        self.error = None;
    }

    /// Drop the error while keeping the current status.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Force a succeeded state for a synchronous, local-only transition
    /// (e.g. logout). Counts as a new dispatch.
    pub fn settle_local(&mut self) {
        self.seq += 1;
        self.status = AsyncStatus::Succeeded;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_no_error() {
        let op = AsyncOp::default();
        assert_eq!(op.status(), AsyncStatus::Idle);
        assert!(op.error().is_none());
    }

    #[test]
    fn begin_enters_loading_and_clears_error() {
        let mut op = AsyncOp::default();
        let t = op.begin();
        op.fail(t, "boom");
        assert!(op.is_failed());
        assert_eq!(op.error(), Some("boom"));

        op.begin();
        assert!(op.is_loading());
        assert!(op.error().is_none());
    }

    #[test]
    fn succeed_and_fail_apply_for_current_ticket() {
        let mut op = AsyncOp::default();
        let t = op.begin();
        assert!(op.succeed(t));
        assert!(op.is_succeeded());

        let t2 = op.begin();
        assert!(op.fail(t2, "nope"));
        assert!(op.is_failed());
        assert_eq!(op.error(), Some("nope"));
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut op = AsyncOp::default();
        let first = op.begin();
        let second = op.begin();

        // Second dispatch settles first; the slow first response must not
        // overwrite it.
        assert!(op.succeed(second));
        assert!(!op.succeed(first));
        assert!(!op.fail(first, "slow failure"));
        assert!(op.is_succeeded());
        assert!(op.error().is_none());
    }

    #[test]
    fn retry_after_failure_reenters_loading() {
        let mut op = AsyncOp::default();
        let t = op.begin();
        op.fail(t, "first try failed");

        let t2 = op.begin();
        assert!(op.is_loading());
        assert!(op.succeed(t2));
    }

    #[test]
    fn reset_returns_to_idle_and_clears_error() {
        let mut op = AsyncOp::default();
        let t = op.begin();
        op.fail(t, "err");
        op.reset();
        assert_eq!(op.status(), AsyncStatus::Idle);
        assert!(op.error().is_none());
    }

    #[test]
    fn settle_local_supersedes_inflight_dispatch() {
        let mut op = AsyncOp::default();
        let inflight = op.begin();
        op.settle_local();
        assert!(op.is_succeeded());
        assert!(!op.fail(inflight, "late network failure"));
        assert!(op.is_succeeded());
    }
}
