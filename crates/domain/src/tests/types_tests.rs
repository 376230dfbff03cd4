// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::money::Money;
use crate::types::{BillingStep, Book, Customer, LineItem, StorefrontPage};
use std::str::FromStr;

#[test]
fn test_billing_step_order_is_linear() {
    assert_eq!(BillingStep::SelectCustomer.next(), Some(BillingStep::AddItems));
    assert_eq!(BillingStep::AddItems.next(), Some(BillingStep::GenerateBill));
    assert_eq!(BillingStep::GenerateBill.next(), None);

    assert_eq!(BillingStep::SelectCustomer.previous(), None);
    assert_eq!(
        BillingStep::AddItems.previous(),
        Some(BillingStep::SelectCustomer)
    );
    assert_eq!(
        BillingStep::GenerateBill.previous(),
        Some(BillingStep::AddItems)
    );
}

#[test]
fn test_billing_step_round_trips_through_strings() {
    for step in [
        BillingStep::SelectCustomer,
        BillingStep::AddItems,
        BillingStep::GenerateBill,
    ] {
        assert_eq!(BillingStep::from_str(step.as_str()).unwrap(), step);
    }
    assert!(BillingStep::from_str("Checkout").is_err());
}

#[test]
fn test_billing_step_defaults_to_select_customer() {
    assert_eq!(BillingStep::default(), BillingStep::SelectCustomer);
}

#[test]
fn test_storefront_page_round_trips_through_strings() {
    for page in [
        StorefrontPage::Home,
        StorefrontPage::Cart,
        StorefrontPage::Wishlist,
        StorefrontPage::Profile,
        StorefrontPage::Orders,
    ] {
        assert_eq!(StorefrontPage::from_str(page.as_str()).unwrap(), page);
    }
    assert!(StorefrontPage::from_str("checkout").is_err());
}

#[test]
fn test_book_normalizes_item_code_to_uppercase() {
    let book: Book = Book::new(
        "bk-1001",
        String::from("The Great Gatsby"),
        String::from("F. Scott Fitzgerald"),
        String::from("A story of wealth, love, and the American Dream."),
        String::from("Classic"),
        Money::from_cents(1_299),
        12,
    );
    assert_eq!(book.item_code, "BK-1001");
    assert_eq!(book.item_id, None);

    let persisted: Book = Book::with_id(
        7,
        "bk-1001",
        String::from("The Great Gatsby"),
        String::from("F. Scott Fitzgerald"),
        String::new(),
        String::from("Classic"),
        Money::from_cents(1_299),
        12,
    );
    assert_eq!(persisted.item_id, Some(7));
    assert_eq!(persisted.item_code, "BK-1001");
}

#[test]
fn test_customer_normalizes_account_number_to_uppercase() {
    let customer: Customer = Customer::new(
        "pah1001",
        String::from("John Doe"),
        String::from("123 Main St, Cityville"),
        String::from("555-0123"),
        String::from("john@example.com"),
    );
    assert_eq!(customer.account_number, "PAH1001");
    assert_eq!(customer.customer_id, None);
}

#[test]
fn test_contact_snapshot_carries_account_number() {
    let customer: Customer = Customer::with_id(
        1,
        "PAH1001",
        String::from("John Doe"),
        String::from("123 Main St, Cityville"),
        String::from("555-0123"),
        String::from("john@example.com"),
    );
    let snapshot = customer.contact_snapshot();
    assert_eq!(snapshot.name, "John Doe");
    assert_eq!(snapshot.account_number, Some(String::from("PAH1001")));
    assert_eq!(snapshot.phone, "555-0123");
}

#[test]
fn test_line_item_starts_at_quantity_one() {
    let line: LineItem = LineItem::new(1, String::from("Setup Fee"), Money::from_cents(9_900));
    assert_eq!(line.quantity, 1);
    assert_eq!(line.line_total(), Money::from_cents(9_900));
}

#[test]
fn test_line_total_scales_with_quantity() {
    let mut line: LineItem =
        LineItem::new(1, String::from("The Great Gatsby"), Money::from_cents(1_299));
    line.quantity = 2;
    assert_eq!(line.line_total(), Money::from_cents(2_598));
}
