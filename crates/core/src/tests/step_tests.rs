// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::OrderCommand;
use crate::error::CoreError;
use crate::state::OrderDraft;
use crate::tests::helpers::{add_first_item, admin_draft, apply_all, create_test_customer, storefront_draft};
use pahana_shop_domain::{BillingStep, DomainError};

#[test]
fn test_advance_without_customer_is_refused() {
    let draft: OrderDraft = admin_draft();

    let result = crate::apply(&draft, OrderCommand::Advance);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::CustomerRequired))
    );
}

#[test]
fn test_advance_with_customer_reaches_add_items() {
    let draft: OrderDraft = apply_all(
        admin_draft(),
        vec![OrderCommand::SelectCustomer {
            customer: create_test_customer(),
        }],
    );

    let result = crate::apply(&draft, OrderCommand::Advance).unwrap();

    assert_eq!(result.new_draft.step, BillingStep::AddItems);
}

#[test]
fn test_advance_with_empty_order_is_refused() {
    let draft: OrderDraft = apply_all(
        admin_draft(),
        vec![
            OrderCommand::SelectCustomer {
                customer: create_test_customer(),
            },
            OrderCommand::Advance,
        ],
    );
    assert_eq!(draft.step, BillingStep::AddItems);

    let result = crate::apply(&draft, OrderCommand::Advance);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::EmptyOrder))
    );
}

#[test]
fn test_advance_with_line_items_reaches_generate_bill() {
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

    let result = crate::apply(&draft, OrderCommand::Advance).unwrap();

    assert_eq!(result.new_draft.step, BillingStep::GenerateBill);
}

#[test]
fn test_back_preserves_state() {
    let draft: OrderDraft = apply_all(
        admin_draft(),
        vec![
            OrderCommand::SelectCustomer {
                customer: create_test_customer(),
            },
            OrderCommand::Advance,
            add_first_item(),
            OrderCommand::Advance,
        ],
    );
    assert_eq!(draft.step, BillingStep::GenerateBill);

    let back_once = crate::apply(&draft, OrderCommand::Back).unwrap().new_draft;
    assert_eq!(back_once.step, BillingStep::AddItems);
    let back_twice = crate::apply(&back_once, OrderCommand::Back).unwrap().new_draft;
    assert_eq!(back_twice.step, BillingStep::SelectCustomer);

    // Nothing was discarded on the way back.
    assert_eq!(back_twice.line_items, draft.line_items);
    assert_eq!(back_twice.customer, draft.customer);
}

#[test]
fn test_back_from_first_step_is_refused() {
    let draft: OrderDraft = admin_draft();

    let result = crate::apply(&draft, OrderCommand::Back);

    assert!(matches!(result, Err(CoreError::TransitionRefused { .. })));
}

#[test]
fn test_advance_past_final_step_is_refused() {
    let draft: OrderDraft = apply_all(
        admin_draft(),
        vec![
            OrderCommand::SelectCustomer {
                customer: create_test_customer(),
            },
            OrderCommand::Advance,
            add_first_item(),
            OrderCommand::Advance,
        ],
    );

    let result = crate::apply(&draft, OrderCommand::Advance);

    assert!(matches!(
        result,
        Err(CoreError::TransitionRefused { step: BillingStep::GenerateBill, .. })
    ));
}

#[test]
fn test_storefront_cart_has_no_wizard_steps() {
    let draft: OrderDraft = storefront_draft();

    assert!(matches!(
        crate::apply(&draft, OrderCommand::Advance),
        Err(CoreError::TransitionRefused { .. })
    ));
    assert!(matches!(
        crate::apply(&draft, OrderCommand::Back),
        Err(CoreError::TransitionRefused { .. })
    ));
}

#[test]
fn test_refused_transition_leaves_draft_unchanged() {
    let draft: OrderDraft = admin_draft();
    let before: OrderDraft = draft.clone();

    let _ = crate::apply(&draft, OrderCommand::Advance);

    assert_eq!(draft, before);
}

#[test]
fn test_reset_returns_to_initial_state() {
    let draft: OrderDraft = apply_all(
        admin_draft(),
        vec![
            OrderCommand::SelectCustomer {
                customer: create_test_customer(),
            },
            OrderCommand::Advance,
            add_first_item(),
            OrderCommand::SetNotes {
                notes: String::from("Rush order"),
            },
        ],
    );

    let result = crate::apply(&draft, OrderCommand::Reset).unwrap();

    assert_eq!(result.new_draft.step, BillingStep::SelectCustomer);
    assert!(result.new_draft.is_empty());
    assert_eq!(result.new_draft.customer, None);
    assert_eq!(result.new_draft.notes, None);
    assert_eq!(result.new_draft.profile, draft.profile);
}
