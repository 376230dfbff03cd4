// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::{render_printable, render_text};
use pahana_shop_domain::{
    CompletedOrder, ContactSnapshot, LineItem, Money, OrderTotals,
};
use time::macros::datetime;

fn completed_storefront_order() -> CompletedOrder {
    let mut first: LineItem =
        LineItem::new(1, String::from("The Great Gatsby"), Money::from_cents(1_299));
    first.quantity = 2;
    let second: LineItem = LineItem::new(2, String::from("Bookmark Set"), Money::from_cents(500));

    CompletedOrder {
        order_id: String::from("ORD31200000"),
        completed_at: datetime!(2026-08-05 12:00:00 UTC),
        customer: ContactSnapshot {
            name: String::from("Sachini Perera"),
            email: String::from("sachini@example.com"),
            phone: String::from("555-7788"),
            address: String::from("12 Beach Rd, Tangalle"),
            account_number: None,
        },
        line_items: vec![first, second],
        totals: OrderTotals {
            subtotal: Money::from_cents(3_098),
            tax: Money::from_cents(248),
            shipping: Some(Money::from_cents(599)),
            total: Money::from_cents(3_945),
            tax_rate_basis_points: 800,
        },
        notes: None,
    }
}

fn completed_admin_bill() -> CompletedOrder {
    let line: LineItem = LineItem::new(
        3,
        String::from("Premium Service Package"),
        Money::from_cents(29_999),
    );

    CompletedOrder {
        order_id: String::from("INV-1785931200000"),
        completed_at: datetime!(2026-08-05 12:00:00 UTC),
        customer: ContactSnapshot {
            name: String::from("John Doe"),
            email: String::from("john@example.com"),
            phone: String::from("555-0123"),
            address: String::from("123 Main St, Cityville"),
            account_number: Some(String::from("PAH1001")),
        },
        line_items: vec![line],
        totals: OrderTotals {
            subtotal: Money::from_cents(29_999),
            tax: Money::from_cents(3_000),
            shipping: None,
            total: Money::from_cents(32_999),
            tax_rate_basis_points: 1_000,
        },
        notes: Some(String::from("Net 30 payment terms.")),
    }
}

#[test]
fn test_text_receipt_contains_every_line_item_and_total() {
    let text: String = render_text(&completed_storefront_order());

    assert!(text.contains("ORDER RECEIPT"));
    assert!(text.contains("Order ID: ORD31200000"));
    assert!(text.contains("Date: 2026-08-05"));
    assert!(text.contains("Customer: Sachini Perera"));
    assert!(text.contains("The Great Gatsby"));
    assert!(text.contains("Quantity: 2 x $12.99 = $25.98"));
    assert!(text.contains("Bookmark Set"));
    assert!(text.contains("Quantity: 1 x $5.00 = $5.00"));
    assert!(text.contains("Subtotal: $30.98"));
    assert!(text.contains("Tax (8%): $2.48"));
    assert!(text.contains("Shipping: $5.99"));
    assert!(text.contains("TOTAL: $39.45"));
    assert!(text.contains(crate::SHOP_WEBSITE));
}

#[test]
fn test_text_receipt_shows_free_shipping_above_threshold() {
    let mut order: CompletedOrder = completed_storefront_order();
    order.totals.shipping = Some(Money::ZERO);

    let text: String = render_text(&order);

    assert!(text.contains("Shipping: Free"));
}

#[test]
fn test_admin_bill_has_no_shipping_line() {
    let text: String = render_text(&completed_admin_bill());

    assert!(!text.contains("Shipping:"));
    assert!(text.contains("Tax (10%): $30.00"));
    assert!(text.contains("Account: PAH1001"));
    assert!(text.contains("Notes: Net 30 payment terms."));
}

#[test]
fn test_printable_receipt_is_a_standalone_document() {
    let html: String = render_printable(&completed_storefront_order());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Receipt - ORD31200000</title>"));
    assert!(html.contains(crate::SHOP_NAME));
    assert!(html.contains(crate::SHOP_ADDRESS));
    assert!(html.contains("<td>The Great Gatsby</td><td>2</td><td>$12.99</td><td>$25.98</td>"));
    assert!(html.contains("<span>Tax (8%):</span><span>$2.48</span>"));
    assert!(html.contains("<span>Total:</span><span>$39.45</span>"));
    assert!(html.contains("Thank you for your business!"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn test_printable_receipt_escapes_markup_in_user_text() {
    let mut order: CompletedOrder = completed_admin_bill();
    order.customer.name = String::from("Smith & Sons <Ltd>");
    order.notes = Some(String::from("Quote: \"urgent\""));

    let html: String = render_printable(&order);

    assert!(html.contains("Smith &amp; Sons &lt;Ltd&gt;"));
    assert!(html.contains("Quote: &quot;urgent&quot;"));
    assert!(!html.contains("<Ltd>"));
}

#[test]
fn test_renderers_are_pure() {
    let order: CompletedOrder = completed_storefront_order();

    assert_eq!(render_text(&order), render_text(&order));
    assert_eq!(render_printable(&order), render_printable(&order));
}
