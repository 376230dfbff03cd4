// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::totals::compute_totals;
use pahana_shop_domain::{
    BillingStep, Book, CompletedOrder, Customer, LineItem, Money, OrderTotals, WorkflowProfile,
};
use time::OffsetDateTime;

/// The current, uncommitted state of an order.
///
/// A draft belongs to exactly one workflow (admin billing wizard or
/// storefront cart) and is owned by one session; all derived totals are
/// recomputed from the line items on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    /// The workflow configuration (pricing, quantity policy, kind).
    pub profile: WorkflowProfile,
    /// The wizard step. Only meaningful for the admin billing workflow.
    pub step: BillingStep,
    /// The selected customer, if any.
    pub customer: Option<Customer>,
    /// The line items, in insertion order (insertion order = display
    /// order).
    pub line_items: Vec<LineItem>,
    /// Optional free-text notes for the bill.
    pub notes: Option<String>,
}

impl OrderDraft {
    /// Creates an empty draft for the given workflow.
    #[must_use]
    pub const fn new(profile: WorkflowProfile) -> Self {
        Self {
            profile,
            step: BillingStep::SelectCustomer,
            customer: None,
            line_items: Vec::new(),
            notes: None,
        }
    }

    /// Returns the line item for a catalog id, if present.
    #[must_use]
    pub fn find_line_item(&self, item_id: i64) -> Option<&LineItem> {
        self.line_items.iter().find(|line| line.item_id == item_id)
    }

    /// Returns whether the draft has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Computes the derived totals for the current line items.
    #[must_use]
    pub fn totals(&self) -> OrderTotals {
        compute_totals(&self.line_items, &self.profile.pricing)
    }
}

/// The result of a successful order transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new draft after the transition.
    pub new_draft: OrderDraft,
    /// The completed-order snapshot, present only for `Complete`.
    pub completed: Option<CompletedOrder>,
}

/// An in-memory sequence of completed orders, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderHistory {
    orders: Vec<CompletedOrder>,
}

impl OrderHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Records a completed order at the front of the history.
    pub fn record(&mut self, order: CompletedOrder) {
        self.orders.insert(0, order);
    }

    /// Returns the recorded orders, newest first.
    #[must_use]
    pub fn orders(&self) -> &[CompletedOrder] {
        &self.orders
    }

    /// Looks up an order by its identifier.
    #[must_use]
    pub fn find(&self, order_id: &str) -> Option<&CompletedOrder> {
        self.orders.iter().find(|order| order.order_id == order_id)
    }

    /// Returns the number of recorded orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Returns the summed grand totals of all recorded orders.
    #[must_use]
    pub fn revenue(&self) -> Money {
        self.orders
            .iter()
            .fold(Money::ZERO, |acc, order| acc.saturating_add(order.totals.total))
    }
}

/// The storefront wishlist: a toggled set of books, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wishlist {
    books: Vec<Book>,
}

impl Wishlist {
    /// Creates an empty wishlist.
    #[must_use]
    pub const fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Toggles a book's membership.
    ///
    /// Returns `true` if the book was added, `false` if it was removed.
    pub fn toggle(&mut self, book: Book) -> bool {
        let position: Option<usize> = self
            .books
            .iter()
            .position(|entry| entry.item_id == book.item_id);
        match position {
            Some(index) => {
                self.books.remove(index);
                false
            }
            None => {
                self.books.push(book);
                true
            }
        }
    }

    /// Returns whether a catalog id is on the wishlist.
    #[must_use]
    pub fn contains(&self, item_id: i64) -> bool {
        self.books
            .iter()
            .any(|book| book.item_id == Some(item_id))
    }

    /// Returns the wishlisted books in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the number of wishlisted books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Generates an admin invoice identifier from a completion timestamp
/// (e.g., `INV-1754380800000`).
#[must_use]
pub fn generate_invoice_id(at: OffsetDateTime) -> String {
    format!("INV-{}", unix_millis(at))
}

/// Generates a storefront order identifier from a completion timestamp:
/// `ORD` followed by the last eight digits of the millisecond timestamp.
#[must_use]
pub fn generate_order_id(at: OffsetDateTime) -> String {
    let millis: String = unix_millis(at).to_string();
    let start: usize = millis.len().saturating_sub(8);
    format!("ORD{}", &millis[start..])
}

/// Returns the Unix timestamp of a moment in milliseconds.
fn unix_millis(at: OffsetDateTime) -> i128 {
    at.unix_timestamp_nanos() / 1_000_000
}
