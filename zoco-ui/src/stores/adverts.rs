//! Adverts (listings) state store.

use crate::display_types::{Advert, AdvertFilters, Pagination};
use crate::status::{AsyncOp, OpTicket};

/// Listing collection, detail selection, filters, pagination, and one
/// status machine per operation family.
///
/// List/detail, create, and delete get independent machines so a create in
/// flight does not visually block the list, and vice versa.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdvertsState {
    pub items: Vec<Advert>,
    pub selected: Option<Advert>,
    pub filters: AdvertFilters,
    pub pagination: Pagination,
    /// Shared by list fetch and detail fetch.
    pub list_op: AsyncOp,
    pub create_op: AsyncOp,
    pub delete_op: AsyncOp,
}

impl AdvertsState {
    pub fn begin_fetch(&mut self) -> OpTicket {
        self.list_op.begin()
    }

    pub fn begin_create(&mut self) -> OpTicket {
        self.create_op.begin()
    }

    pub fn begin_delete(&mut self) -> OpTicket {
        self.delete_op.begin()
    }

    /// List fetch resolved: wholesale replace of the collection. Total and
    /// has-more are recomputed from the response size; page and limit are
    /// left alone.
    pub fn fetch_succeeded(&mut self, ticket: OpTicket, items: Vec<Advert>) -> bool {
        if !self.list_op.succeed(ticket) {
            return false;
        }
        let count = items.len() as u32;
        self.items = items;
        self.pagination.total = count;
        self.pagination.has_more = count == self.pagination.limit;
        true
    }

    /// List fetch failed: prior items stay untouched.
    pub fn fetch_failed(&mut self, ticket: OpTicket, message: impl Into<String>) -> bool {
        self.list_op.fail(ticket, message)
    }

    /// Detail fetch resolved.
    pub fn detail_succeeded(&mut self, ticket: OpTicket, advert: Advert) -> bool {
        if !self.list_op.succeed(ticket) {
            return false;
        }
        self.selected = Some(advert);
        true
    }

    /// Create resolved: the new listing goes to the front (most recent
    /// first). No list re-fetch.
    pub fn create_succeeded(&mut self, ticket: OpTicket, advert: Advert) -> bool {
        if !self.create_op.succeed(ticket) {
            return false;
        }
        self.items.insert(0, advert);
        self.pagination.total += 1;
        true
    }

    pub fn create_failed(&mut self, ticket: OpTicket, message: impl Into<String>) -> bool {
        self.create_op.fail(ticket, message)
    }

    /// Delete resolved: drop the matching item, floor the total at zero,
    /// and clear the selection iff it was the deleted listing.
    pub fn delete_succeeded(&mut self, ticket: OpTicket, id: &str) -> bool {
        if !self.delete_op.succeed(ticket) {
            return false;
        }
        self.items.retain(|advert| advert.id != id);
        self.pagination.total = self.pagination.total.saturating_sub(1);
        if self.selected.as_ref().is_some_and(|a| a.id == id) {
            self.selected = None;
        }
        true
    }

    pub fn delete_failed(&mut self, ticket: OpTicket, message: impl Into<String>) -> bool {
        self.delete_op.fail(ticket, message)
    }

    /// Replace the filter set. New criteria invalidate the pagination
    /// position, so the page resets to 1.
    pub fn set_filters(&mut self, filters: AdvertFilters) {
        self.filters = filters;
        self.pagination.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.set_filters(AdvertFilters::default());
    }

    /// Mutates only the page field.
    pub fn set_page(&mut self, page: u32) {
        self.pagination.page = page;
    }

    pub fn clear_selected(&mut self) {
        self.selected = None;
    }

    pub fn clear_error(&mut self) {
        self.list_op.clear_error();
    }

    pub fn clear_create_status(&mut self) {
        self.create_op.reset();
    }

    pub fn clear_delete_status(&mut self) {
        self.delete_op.reset();
    }
}
