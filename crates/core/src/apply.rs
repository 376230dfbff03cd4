// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::OrderCommand;
use crate::error::CoreError;
use crate::state::{OrderDraft, TransitionResult};
use pahana_shop_domain::{
    BillingStep, CompletedOrder, ContactSnapshot, DomainError, LineItem, QuantityPolicy,
    WorkflowKind,
};

/// Applies a command to an order draft, producing the new draft and, for
/// `Complete`, the immutable order snapshot.
///
/// The input draft is never mutated: a failed command leaves the caller's
/// state exactly as it was.
///
/// # Arguments
///
/// * `draft` - The current draft (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new draft
/// * `Err(CoreError)` if the command is refused or violates a domain rule
///
/// # Errors
///
/// Returns an error if:
/// - A quantity change or removal names a catalog id not in the order
/// - A gated step transition is attempted without its precondition
///   (customer selected, at least one line item)
/// - `Complete` is issued on an empty order, away from the final wizard
///   step, or without any contact to record
#[allow(clippy::too_many_lines)]
pub fn apply(draft: &OrderDraft, command: OrderCommand) -> Result<TransitionResult, CoreError> {
    match command {
        OrderCommand::AddItem {
            item_id,
            name,
            unit_price,
        } => {
            let mut new_draft: OrderDraft = draft.clone();
            match new_draft
                .line_items
                .iter_mut()
                .find(|line| line.item_id == item_id)
            {
                Some(line) => line.quantity = line.quantity.saturating_add(1),
                None => new_draft
                    .line_items
                    .push(LineItem::new(item_id, name, unit_price)),
            }
            Ok(TransitionResult {
                new_draft,
                completed: None,
            })
        }
        OrderCommand::AdjustQuantity { item_id, delta } => {
            let current: i64 = i64::from(line_quantity(draft, item_id)?);
            apply_quantity_target(draft, item_id, current.saturating_add(delta))
        }
        OrderCommand::SetQuantity { item_id, quantity } => {
            // Validate the line exists before applying the target.
            line_quantity(draft, item_id)?;
            apply_quantity_target(draft, item_id, quantity)
        }
        OrderCommand::RemoveItem { item_id } => {
            line_quantity(draft, item_id)?;
            let mut new_draft: OrderDraft = draft.clone();
            new_draft.line_items.retain(|line| line.item_id != item_id);
            Ok(TransitionResult {
                new_draft,
                completed: None,
            })
        }
        OrderCommand::SelectCustomer { customer } => {
            let mut new_draft: OrderDraft = draft.clone();
            new_draft.customer = Some(customer);
            Ok(TransitionResult {
                new_draft,
                completed: None,
            })
        }
        OrderCommand::ClearCustomer => {
            let mut new_draft: OrderDraft = draft.clone();
            new_draft.customer = None;
            Ok(TransitionResult {
                new_draft,
                completed: None,
            })
        }
        OrderCommand::SetNotes { notes } => {
            let mut new_draft: OrderDraft = draft.clone();
            let trimmed: &str = notes.trim();
            new_draft.notes = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
            Ok(TransitionResult {
                new_draft,
                completed: None,
            })
        }
        OrderCommand::Advance => {
            require_wizard(draft, "advance")?;
            let Some(next) = draft.step.next() else {
                return Err(CoreError::TransitionRefused {
                    step: draft.step,
                    reason: String::from("already at the final step"),
                });
            };
            // Forward progression is gated.
            match draft.step {
                BillingStep::SelectCustomer if draft.customer.is_none() => {
                    return Err(CoreError::DomainViolation(DomainError::CustomerRequired));
                }
                BillingStep::AddItems if draft.is_empty() => {
                    return Err(CoreError::DomainViolation(DomainError::EmptyOrder));
                }
                _ => {}
            }
            let mut new_draft: OrderDraft = draft.clone();
            new_draft.step = next;
            Ok(TransitionResult {
                new_draft,
                completed: None,
            })
        }
        OrderCommand::Back => {
            require_wizard(draft, "go back")?;
            let Some(previous) = draft.step.previous() else {
                return Err(CoreError::TransitionRefused {
                    step: draft.step,
                    reason: String::from("already at the first step"),
                });
            };
            // Backward transitions never discard state.
            let mut new_draft: OrderDraft = draft.clone();
            new_draft.step = previous;
            Ok(TransitionResult {
                new_draft,
                completed: None,
            })
        }
        OrderCommand::Reset => Ok(TransitionResult {
            new_draft: OrderDraft::new(draft.profile),
            completed: None,
        }),
        OrderCommand::Complete {
            order_id,
            completed_at,
            contact,
        } => {
            if draft.is_empty() {
                return Err(CoreError::DomainViolation(DomainError::EmptyOrder));
            }
            if draft.profile.kind == WorkflowKind::AdminBilling
                && draft.step != BillingStep::GenerateBill
            {
                return Err(CoreError::TransitionRefused {
                    step: draft.step,
                    reason: String::from("a bill can only be completed from the final step"),
                });
            }
            let contact: ContactSnapshot = match contact {
                Some(snapshot) => snapshot,
                None => draft
                    .customer
                    .as_ref()
                    .map(pahana_shop_domain::Customer::contact_snapshot)
                    .ok_or(CoreError::DomainViolation(DomainError::CustomerRequired))?,
            };

            let completed: CompletedOrder = CompletedOrder {
                order_id,
                completed_at,
                customer: contact,
                line_items: draft.line_items.clone(),
                totals: draft.totals(),
                notes: draft.notes.clone(),
            };

            Ok(TransitionResult {
                new_draft: OrderDraft::new(draft.profile),
                completed: Some(completed),
            })
        }
    }
}

/// Looks up a line item's quantity, or fails with `LineItemNotFound`.
fn line_quantity(draft: &OrderDraft, item_id: i64) -> Result<u32, CoreError> {
    draft
        .find_line_item(item_id)
        .map(|line| line.quantity)
        .ok_or(CoreError::DomainViolation(DomainError::LineItemNotFound {
            item_id,
        }))
}

/// Applies a target quantity to an existing line item under the draft's
/// quantity policy.
///
/// A target below 1 either clamps to 1 (`FloorAtOne`, the admin wizard)
/// or removes the line (`RemoveBelowOne`, the storefront cart).
fn apply_quantity_target(
    draft: &OrderDraft,
    item_id: i64,
    target: i64,
) -> Result<TransitionResult, CoreError> {
    let mut new_draft: OrderDraft = draft.clone();
    if target < 1 {
        match draft.profile.quantity_policy {
            QuantityPolicy::FloorAtOne => {
                if let Some(line) = new_draft
                    .line_items
                    .iter_mut()
                    .find(|line| line.item_id == item_id)
                {
                    line.quantity = 1;
                }
            }
            QuantityPolicy::RemoveBelowOne => {
                new_draft.line_items.retain(|line| line.item_id != item_id);
            }
        }
    } else {
        let quantity: u32 = u32::try_from(target).unwrap_or(u32::MAX);
        if let Some(line) = new_draft
            .line_items
            .iter_mut()
            .find(|line| line.item_id == item_id)
        {
            line.quantity = quantity;
        }
    }
    Ok(TransitionResult {
        new_draft,
        completed: None,
    })
}

/// Fails unless the draft belongs to the step-gated admin wizard.
fn require_wizard(draft: &OrderDraft, action: &str) -> Result<(), CoreError> {
    if draft.profile.kind == WorkflowKind::AdminBilling {
        Ok(())
    } else {
        Err(CoreError::TransitionRefused {
            step: draft.step,
            reason: format!("the storefront cart has no wizard steps to {action}"),
        })
    }
}
