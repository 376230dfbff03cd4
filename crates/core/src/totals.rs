// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use pahana_shop_domain::{LineItem, Money, OrderTotals, PricingPolicy};

/// Computes the derived totals for a set of line items under a pricing
/// policy.
///
/// This is the single place totals are derived. It is side-effect-free
/// and callable at any time, including with zero items: the subtotal and
/// tax are then zero, and the total equals whatever shipping the policy
/// charges on an empty order (the storefront's flat fee, since an empty
/// subtotal is not above the free-shipping threshold).
///
/// # Arguments
///
/// * `line_items` - The current line items
/// * `pricing` - The workflow's fixed pricing policy
#[must_use]
pub fn compute_totals(line_items: &[LineItem], pricing: &PricingPolicy) -> OrderTotals {
    let subtotal: Money = line_items
        .iter()
        .fold(Money::ZERO, |acc, line| acc.saturating_add(line.line_total()));
    let tax: Money = pricing.tax_on(subtotal);
    let shipping: Option<Money> = pricing.shipping_on(subtotal);
    let total: Money = subtotal
        .saturating_add(tax)
        .saturating_add(shipping.unwrap_or(Money::ZERO));

    OrderTotals {
        subtotal,
        tax,
        shipping,
        total,
        tax_rate_basis_points: pricing.tax_rate_basis_points,
    }
}
