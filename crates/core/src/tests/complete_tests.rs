// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::OrderCommand;
use crate::error::CoreError;
use crate::state::{OrderDraft, OrderHistory, generate_invoice_id, generate_order_id};
use crate::tests::helpers::{
    COMPLETED_AT, add_first_item, add_second_item, admin_draft, apply_all, create_test_customer,
    storefront_draft,
};
use pahana_shop_domain::{BillingStep, ContactSnapshot, DomainError, Money};

fn storefront_contact() -> ContactSnapshot {
    ContactSnapshot {
        name: String::from("Sachini Perera"),
        email: String::from("sachini@example.com"),
        phone: String::from("555-7788"),
        address: String::from("12 Beach Rd, Tangalle"),
        account_number: None,
    }
}

fn billable_admin_draft() -> OrderDraft {
    apply_all(
        admin_draft(),
        vec![
            OrderCommand::SelectCustomer {
                customer: create_test_customer(),
            },
            OrderCommand::Advance,
            add_first_item(),
            add_first_item(),
            add_second_item(),
            OrderCommand::Advance,
        ],
    )
}

#[test]
fn test_complete_snapshots_order_and_resets_draft() {
    let draft: OrderDraft = billable_admin_draft();
    let expected_totals = draft.totals();
    let mut history: OrderHistory = OrderHistory::new();

    let result = crate::apply(
        &draft,
        OrderCommand::Complete {
            order_id: generate_invoice_id(COMPLETED_AT),
            completed_at: COMPLETED_AT,
            contact: None,
        },
    )
    .unwrap();

    let completed = result.completed.unwrap();
    history.record(completed.clone());

    // Exactly one new history entry, equal to the pre-completion snapshot.
    assert_eq!(history.len(), 1);
    assert_eq!(history.orders()[0], completed);
    assert_eq!(completed.totals, expected_totals);
    assert_eq!(completed.line_items.len(), 2);
    assert_eq!(completed.customer.account_number, Some(String::from("PAH1001")));

    // The live draft is back at the initial step with nothing in it.
    assert_eq!(result.new_draft.step, BillingStep::SelectCustomer);
    assert!(result.new_draft.is_empty());
    assert_eq!(result.new_draft.customer, None);
}

#[test]
fn test_completed_snapshot_is_independent_of_later_edits() {
    let draft: OrderDraft = billable_admin_draft();

    let result = crate::apply(
        &draft,
        OrderCommand::Complete {
            order_id: String::from("INV-1"),
            completed_at: COMPLETED_AT,
            contact: None,
        },
    )
    .unwrap();
    let completed = result.completed.unwrap();

    // Mutating a fresh draft afterwards cannot affect the snapshot.
    let _ = apply_all(result.new_draft, vec![add_first_item()]);
    assert_eq!(completed.line_items[0].quantity, 2);
    assert_eq!(completed.totals.subtotal, Money::from_cents(3_098));
}

#[test]
fn test_complete_away_from_final_step_is_refused() {
    let draft: OrderDraft = apply_all(
        admin_draft(),
        vec![
            OrderCommand::SelectCustomer {
                customer: create_test_customer(),
            },
            OrderCommand::Advance,
            add_first_item(),
        ],
    );

    let result = crate::apply(
        &draft,
        OrderCommand::Complete {
            order_id: String::from("INV-1"),
            completed_at: COMPLETED_AT,
            contact: None,
        },
    );

    assert!(matches!(
        result,
        Err(CoreError::TransitionRefused { step: BillingStep::AddItems, .. })
    ));
}

#[test]
fn test_complete_empty_order_is_refused() {
    let draft: OrderDraft = storefront_draft();

    let result = crate::apply(
        &draft,
        OrderCommand::Complete {
            order_id: String::from("ORD00000001"),
            completed_at: COMPLETED_AT,
            contact: Some(storefront_contact()),
        },
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::EmptyOrder))
    );
}

#[test]
fn test_storefront_checkout_uses_provided_contact() {
    let draft: OrderDraft = apply_all(storefront_draft(), vec![add_first_item()]);

    let result = crate::apply(
        &draft,
        OrderCommand::Complete {
            order_id: generate_order_id(COMPLETED_AT),
            completed_at: COMPLETED_AT,
            contact: Some(storefront_contact()),
        },
    )
    .unwrap();

    let completed = result.completed.unwrap();
    assert_eq!(completed.customer.name, "Sachini Perera");
    assert_eq!(completed.customer.account_number, None);
    assert_eq!(completed.totals.shipping, Some(Money::from_cents(599)));
}

#[test]
fn test_storefront_checkout_without_contact_is_refused() {
    let draft: OrderDraft = apply_all(storefront_draft(), vec![add_first_item()]);

    let result = crate::apply(
        &draft,
        OrderCommand::Complete {
            order_id: String::from("ORD00000001"),
            completed_at: COMPLETED_AT,
            contact: None,
        },
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::CustomerRequired))
    );
}

#[test]
fn test_history_records_newest_first_and_sums_revenue() {
    let mut history: OrderHistory = OrderHistory::new();
    let draft: OrderDraft = apply_all(storefront_draft(), vec![add_first_item()]);

    let first = crate::apply(
        &draft,
        OrderCommand::Complete {
            order_id: String::from("ORD00000001"),
            completed_at: COMPLETED_AT,
            contact: Some(storefront_contact()),
        },
    )
    .unwrap();
    history.record(first.completed.clone().unwrap());

    let second_draft = apply_all(first.new_draft, vec![add_second_item()]);
    let second = crate::apply(
        &second_draft,
        OrderCommand::Complete {
            order_id: String::from("ORD00000002"),
            completed_at: COMPLETED_AT,
            contact: Some(storefront_contact()),
        },
    )
    .unwrap();
    history.record(second.completed.clone().unwrap());

    assert_eq!(history.len(), 2);
    assert_eq!(history.orders()[0].order_id, "ORD00000002");
    assert_eq!(history.orders()[1].order_id, "ORD00000001");
    assert!(history.find("ORD00000001").is_some());
    assert!(history.find("ORD99999999").is_none());

    let expected = first
        .completed
        .unwrap()
        .totals
        .total
        .saturating_add(second.completed.unwrap().totals.total);
    assert_eq!(history.revenue(), expected);
}

#[test]
fn test_generated_identifiers_are_time_derived() {
    // 2026-08-05 12:00:00 UTC is 1785931200000 ms since the epoch.
    assert_eq!(generate_invoice_id(COMPLETED_AT), "INV-1785931200000");
    assert_eq!(generate_order_id(COMPLETED_AT), "ORD31200000");
}
