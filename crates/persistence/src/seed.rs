// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sample data inserted into an empty store.
//!
//! The storefront book catalog, the customer directory, the admin billing
//! service items, and two operator accounts, so a fresh server is usable
//! immediately.

use pahana_shop_domain::{Book, Customer, Money};

/// A seed operator account: (user name, email, password, role).
pub type SeedOperator = (&'static str, &'static str, &'static str, &'static str);

/// The sample customer directory.
#[must_use]
pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new(
            "PAH1001",
            String::from("John Doe"),
            String::from("123 Main St, Cityville"),
            String::from("555-0123"),
            String::from("john@example.com"),
        ),
        Customer::new(
            "PAH1002",
            String::from("Jane Smith"),
            String::from("456 Oak Ave, Townsville"),
            String::from("555-0456"),
            String::from("jane@example.com"),
        ),
        Customer::new(
            "PAH1003",
            String::from("Robert Johnson"),
            String::from("789 Pine Rd, Villageton"),
            String::from("555-0789"),
            String::from("robert@example.com"),
        ),
        Customer::new(
            "PAH1004",
            String::from("Sarah Williams"),
            String::from("101 Maple Ln, Hamletville"),
            String::from("555-0321"),
            String::from("sarah@example.com"),
        ),
        Customer::new(
            "PAH1005",
            String::from("Michael Brown"),
            String::from("202 Birch Blvd, Boroughburg"),
            String::from("555-0654"),
            String::from("michael@example.com"),
        ),
    ]
}

/// The sample catalog: the storefront books plus the billable service
/// items used by the admin wizard.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn sample_catalog() -> Vec<Book> {
    vec![
        Book::new(
            "BK-1001",
            String::from("The Great Gatsby"),
            String::from("F. Scott Fitzgerald"),
            String::from("A story of wealth, love, and the American Dream in the Jazz Age."),
            String::from("Classic"),
            Money::from_cents(1_299),
            24,
        ),
        Book::new(
            "BK-1002",
            String::from("To Kill a Mockingbird"),
            String::from("Harper Lee"),
            String::from("A powerful story of racial injustice and the loss of innocence."),
            String::from("Fiction"),
            Money::from_cents(1_450),
            18,
        ),
        Book::new(
            "BK-1003",
            String::from("1984"),
            String::from("George Orwell"),
            String::from(
                "A dystopian novel that examines the consequences of totalitarianism.",
            ),
            String::from("Dystopian"),
            Money::from_cents(1_075),
            32,
        ),
        Book::new(
            "BK-1004",
            String::from("Pride and Prejudice"),
            String::from("Jane Austen"),
            String::from(
                "A romantic novel of manners depicting the emotional development of the protagonist.",
            ),
            String::from("Romance"),
            Money::from_cents(999),
            15,
        ),
        Book::new(
            "BK-1005",
            String::from("The Hobbit"),
            String::from("J.R.R. Tolkien"),
            String::from("A fantasy novel about the adventures of hobbit Bilbo Baggins."),
            String::from("Fantasy"),
            Money::from_cents(1_625),
            21,
        ),
        Book::new(
            "BK-1006",
            String::from("Harry Potter and the Philosopher's Stone"),
            String::from("J.K. Rowling"),
            String::from("The first novel in the Harry Potter series about a young wizard."),
            String::from("Fantasy"),
            Money::from_cents(1_899),
            40,
        ),
        Book::new(
            "SRV-2001",
            String::from("Premium Service Package"),
            String::new(),
            String::from("Full-service account management."),
            String::from("Services"),
            Money::from_cents(29_999),
            0,
        ),
        Book::new(
            "SRV-2002",
            String::from("Monthly Subscription"),
            String::new(),
            String::from("Recurring monthly membership."),
            String::from("Subscriptions"),
            Money::from_cents(2_999),
            0,
        ),
        Book::new(
            "SRV-2003",
            String::from("Setup Fee"),
            String::new(),
            String::from("One-time account setup."),
            String::from("Fees"),
            Money::from_cents(9_900),
            0,
        ),
        Book::new(
            "SRV-2004",
            String::from("Consultation Hour"),
            String::new(),
            String::from("One hour of on-site consultation."),
            String::from("Services"),
            Money::from_cents(15_000),
            0,
        ),
        Book::new(
            "SRV-2005",
            String::from("Additional License"),
            String::new(),
            String::from("One additional seat license."),
            String::from("Licenses"),
            Money::from_cents(4_999),
            0,
        ),
        Book::new(
            "SRV-2006",
            String::from("Priority Support"),
            String::new(),
            String::from("12-month priority support plan."),
            String::from("Services"),
            Money::from_cents(19_999),
            0,
        ),
        Book::new(
            "SRV-2007",
            String::from("Data Storage (1TB)"),
            String::new(),
            String::from("One terabyte of hosted storage."),
            String::from("Storage"),
            Money::from_cents(1_999),
            0,
        ),
        Book::new(
            "SRV-2008",
            String::from("Custom Integration"),
            String::new(),
            String::from("Bespoke integration work."),
            String::from("Services"),
            Money::from_cents(49_999),
            0,
        ),
    ]
}

/// The sample operator accounts.
#[must_use]
pub fn sample_operators() -> Vec<SeedOperator> {
    vec![
        ("Admin User", "admin@pahana.com", "admin123", "admin"),
        ("Regular User", "user@pahana.com", "user123", "user"),
    ]
}
