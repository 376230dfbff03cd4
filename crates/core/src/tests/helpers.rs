// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::OrderCommand;
use crate::state::OrderDraft;
use pahana_shop_domain::{Customer, Money, WorkflowProfile};
use time::OffsetDateTime;
use time::macros::datetime;

/// A fixed completion timestamp so generated identifiers are
/// deterministic in tests.
pub const COMPLETED_AT: OffsetDateTime = datetime!(2026-08-05 12:00:00 UTC);

pub fn create_test_customer() -> Customer {
    Customer::with_id(
        1,
        "PAH1001",
        String::from("John Doe"),
        String::from("123 Main St, Cityville"),
        String::from("555-0123"),
        String::from("john@example.com"),
    )
}

/// Catalog id 1 at $12.99, matching the worked example in the billing
/// scenarios.
pub fn add_first_item() -> OrderCommand {
    OrderCommand::AddItem {
        item_id: 1,
        name: String::from("The Great Gatsby"),
        unit_price: Money::from_cents(1_299),
    }
}

/// Catalog id 2 at $5.00.
pub fn add_second_item() -> OrderCommand {
    OrderCommand::AddItem {
        item_id: 2,
        name: String::from("Bookmark Set"),
        unit_price: Money::from_cents(500),
    }
}

pub fn admin_draft() -> OrderDraft {
    OrderDraft::new(WorkflowProfile::ADMIN_BILLING)
}

pub fn storefront_draft() -> OrderDraft {
    OrderDraft::new(WorkflowProfile::STOREFRONT_CART)
}

/// Applies a sequence of commands, panicking on any refusal.
pub fn apply_all(draft: OrderDraft, commands: Vec<OrderCommand>) -> OrderDraft {
    commands.into_iter().fold(draft, |current, command| {
        crate::apply(&current, command).expect("command should apply").new_draft
    })
}
