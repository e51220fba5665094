//! Available-tags state store.

use crate::status::{AsyncOp, OpTicket};

/// The server's tag vocabulary, used to populate filter and create forms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagsState {
    pub items: Vec<String>,
    pub op: AsyncOp,
}

impl TagsState {
    pub fn begin_fetch(&mut self) -> OpTicket {
        self.op.begin()
    }

    /// Replace the vocabulary wholesale.
    pub fn fetch_succeeded(&mut self, ticket: OpTicket, tags: Vec<String>) -> bool {
        if !self.op.succeed(ticket) {
            return false;
        }
        self.items = tags;
        true
    }

    pub fn fetch_failed(&mut self, ticket: OpTicket, message: impl Into<String>) -> bool {
        self.op.fail(ticket, message)
    }

    pub fn clear_error(&mut self) {
        self.op.clear_error();
    }
}
