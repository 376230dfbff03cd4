// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::filtering::{filter_customers, filter_items};
use pahana_shop_domain::{Book, Customer, Money};

fn directory() -> Vec<Customer> {
    vec![
        Customer::with_id(
            1,
            "PAH1001",
            String::from("John Doe"),
            String::from("123 Main St, Cityville"),
            String::from("555-0123"),
            String::from("john@example.com"),
        ),
        Customer::with_id(
            2,
            "PAH1002",
            String::from("Jane Smith"),
            String::from("456 Oak Ave, Townsville"),
            String::from("555-0456"),
            String::from("jane@example.com"),
        ),
        Customer::with_id(
            12,
            "PAH1012",
            String::from("Johanna Doyle"),
            String::from("9 Elm Ct, Cityville"),
            String::from("555-0999"),
            String::from("jdoyle@post.org"),
        ),
    ]
}

fn catalog() -> Vec<Book> {
    vec![
        Book::with_id(
            1,
            "BK-1001",
            String::from("The Great Gatsby"),
            String::from("F. Scott Fitzgerald"),
            String::from("A story of wealth and love."),
            String::from("Classic"),
            Money::from_cents(1_299),
            24,
        ),
        Book::with_id(
            2,
            "BK-1005",
            String::from("The Hobbit"),
            String::from("J.R.R. Tolkien"),
            String::from("Adventures of Bilbo Baggins."),
            String::from("Fantasy"),
            Money::from_cents(1_625),
            21,
        ),
        Book::with_id(
            3,
            "SRV-2003",
            String::from("Setup Fee"),
            String::new(),
            String::from("One-time account setup."),
            String::from("Fees"),
            Money::from_cents(9_900),
            0,
        ),
    ]
}

#[test]
fn test_empty_query_matches_everything() {
    let customers = directory();
    assert_eq!(filter_customers(&customers, "").len(), 3);
    assert_eq!(filter_customers(&customers, "   ").len(), 3);

    let items = catalog();
    assert_eq!(filter_items(&items, "").len(), 3);
}

#[test]
fn test_customer_filter_is_case_insensitive_substring() {
    let customers = directory();

    let by_name = filter_customers(&customers, "joh");
    assert_eq!(by_name.len(), 2);

    let exact = filter_customers(&customers, "JANE SMITH");
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].account_number, "PAH1002");
}

#[test]
fn test_customer_filter_matches_account_id_and_email() {
    let customers = directory();

    assert_eq!(filter_customers(&customers, "pah1012").len(), 1);
    assert_eq!(filter_customers(&customers, "post.org").len(), 1);

    // Numeric ids match as substrings of their decimal form.
    let by_id = filter_customers(&customers, "12");
    assert!(by_id.iter().any(|c| c.customer_id == Some(12)));
}

#[test]
fn test_customer_filter_returns_empty_for_no_match() {
    let customers = directory();
    assert!(filter_customers(&customers, "zzz-nobody").is_empty());
}

#[test]
fn test_item_filter_matches_title_code_category_author() {
    let items = catalog();

    assert_eq!(filter_items(&items, "hobbit").len(), 1);
    assert_eq!(filter_items(&items, "bk-10").len(), 2);
    assert_eq!(filter_items(&items, "fees").len(), 1);
    assert_eq!(filter_items(&items, "tolkien").len(), 1);
    assert_eq!(filter_items(&items, "the").len(), 2);
}

#[test]
fn test_filtering_does_not_mutate_the_source_list() {
    let items = catalog();
    let before: Vec<Book> = items.clone();

    let _ = filter_items(&items, "hobbit");

    assert_eq!(items, before);
}
