// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use pahana_shop_domain::{ContactSnapshot, Customer, Money};
use time::OffsetDateTime;

/// A command represents user intent as data only.
///
/// Commands are the only way to request changes to an order draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderCommand {
    /// Add one unit of a catalog entry to the order.
    ///
    /// If a line item with the same catalog id already exists, its
    /// quantity is incremented; otherwise a new line item with quantity 1
    /// is appended.
    AddItem {
        /// The catalog id.
        item_id: i64,
        /// The display name.
        name: String,
        /// The unit price.
        unit_price: Money,
    },
    /// Change a line item's quantity by a relative delta.
    ///
    /// The result is subject to the workflow's quantity policy.
    AdjustQuantity {
        /// The catalog id of the line item.
        item_id: i64,
        /// The signed change to apply.
        delta: i64,
    },
    /// Set a line item's quantity to an absolute target.
    ///
    /// A target below 1 is subject to the workflow's quantity policy.
    SetQuantity {
        /// The catalog id of the line item.
        item_id: i64,
        /// The target quantity.
        quantity: i64,
    },
    /// Remove a line item unconditionally.
    RemoveItem {
        /// The catalog id of the line item.
        item_id: i64,
    },
    /// Select the customer the order is billed to.
    SelectCustomer {
        /// The customer.
        customer: Customer,
    },
    /// Clear the selected customer.
    ClearCustomer,
    /// Set or clear the free-text notes.
    SetNotes {
        /// The notes text. Blank text clears the notes.
        notes: String,
    },
    /// Advance the wizard to the next step, subject to gating.
    Advance,
    /// Go back to the previous wizard step. Always permitted between
    /// steps; state is preserved.
    Back,
    /// Clear line items, customer, notes, and step back to initial.
    Reset,
    /// Complete the order: snapshot it and reset the draft.
    Complete {
        /// The generated order identifier.
        order_id: String,
        /// The completion timestamp.
        completed_at: OffsetDateTime,
        /// The contact to record on the snapshot. When `None`, the
        /// draft's selected customer is used.
        contact: Option<ContactSnapshot>,
    },
}
