// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::money::Money;

/// A threshold-based shipping rule.
///
/// Shipping is free when the subtotal is strictly above the threshold;
/// otherwise the flat fee applies, including on an empty order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingRule {
    /// Subtotals strictly above this amount ship for free.
    pub free_threshold: Money,
    /// The flat fee charged at or below the threshold.
    pub flat_fee: Money,
}

impl ShippingRule {
    /// Returns the shipping fee for a given subtotal.
    #[must_use]
    pub fn fee_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_threshold {
            Money::ZERO
        } else {
            self.flat_fee
        }
    }
}

/// The fixed pricing rules of a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    /// The tax rate in basis points (1% = 100).
    pub tax_rate_basis_points: u32,
    /// The shipping rule, if the workflow charges shipping.
    pub shipping: Option<ShippingRule>,
}

impl PricingPolicy {
    /// Returns the tax on a subtotal at this policy's rate.
    #[must_use]
    pub fn tax_on(&self, subtotal: Money) -> Money {
        subtotal.percentage(self.tax_rate_basis_points)
    }

    /// Returns the shipping fee for a subtotal, if this policy charges
    /// shipping.
    #[must_use]
    pub fn shipping_on(&self, subtotal: Money) -> Option<Money> {
        self.shipping.map(|rule| rule.fee_for(subtotal))
    }
}

/// How a workflow treats a quantity change that would drop below 1.
///
/// The two workflows intentionally diverge here: the admin wizard never
/// auto-removes on decrement, while the storefront cart treats a target
/// below 1 as removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityPolicy {
    /// Clamp the resulting quantity to a minimum of 1.
    FloorAtOne,
    /// Remove the line item when the resulting quantity would be below 1.
    RemoveBelowOne,
}

/// Which order workflow a draft belongs to.
///
/// The admin wizard is step-gated; the storefront cart is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowKind {
    /// The admin billing wizard (SelectCustomer → AddItems → GenerateBill).
    AdminBilling,
    /// The storefront shopping cart.
    StorefrontCart,
}

/// The fixed configuration of an order workflow: pricing plus quantity
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowProfile {
    /// The workflow this profile configures.
    pub kind: WorkflowKind,
    /// The pricing rules.
    pub pricing: PricingPolicy,
    /// The decrement policy.
    pub quantity_policy: QuantityPolicy,
}

impl WorkflowProfile {
    /// The admin billing wizard: 10% tax, no shipping, decrements floor
    /// at quantity 1.
    pub const ADMIN_BILLING: Self = Self {
        kind: WorkflowKind::AdminBilling,
        pricing: PricingPolicy {
            tax_rate_basis_points: 1_000,
            shipping: None,
        },
        quantity_policy: QuantityPolicy::FloorAtOne,
    };

    /// The storefront cart: 8% tax, free shipping above $50.00 with a
    /// flat $5.99 fee otherwise, removal when quantity drops below 1.
    pub const STOREFRONT_CART: Self = Self {
        kind: WorkflowKind::StorefrontCart,
        pricing: PricingPolicy {
            tax_rate_basis_points: 800,
            shipping: Some(ShippingRule {
                free_threshold: Money::from_cents(5_000),
                flat_fee: Money::from_cents(599),
            }),
        },
        quantity_policy: QuantityPolicy::RemoveBelowOne,
    };
}
