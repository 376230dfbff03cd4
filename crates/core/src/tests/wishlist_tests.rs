// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Wishlist;
use pahana_shop_domain::{Book, Money};

fn gatsby() -> Book {
    Book::with_id(
        1,
        "BK-1001",
        String::from("The Great Gatsby"),
        String::from("F. Scott Fitzgerald"),
        String::from("A story of wealth, love, and the American Dream."),
        String::from("Classic"),
        Money::from_cents(1_299),
        12,
    )
}

fn hobbit() -> Book {
    Book::with_id(
        5,
        "BK-1005",
        String::from("The Hobbit"),
        String::from("J.R.R. Tolkien"),
        String::from("A fantasy novel about the adventures of Bilbo Baggins."),
        String::from("Fantasy"),
        Money::from_cents(1_625),
        7,
    )
}

#[test]
fn test_toggle_adds_then_removes() {
    let mut wishlist: Wishlist = Wishlist::new();

    assert!(wishlist.toggle(gatsby()));
    assert!(wishlist.contains(1));
    assert_eq!(wishlist.len(), 1);

    assert!(!wishlist.toggle(gatsby()));
    assert!(!wishlist.contains(1));
    assert!(wishlist.is_empty());
}

#[test]
fn test_toggle_keeps_insertion_order() {
    let mut wishlist: Wishlist = Wishlist::new();
    wishlist.toggle(gatsby());
    wishlist.toggle(hobbit());

    let titles: Vec<&str> = wishlist.books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["The Great Gatsby", "The Hobbit"]);

    // Removing the first leaves the second in place.
    wishlist.toggle(gatsby());
    assert!(wishlist.contains(5));
    assert!(!wishlist.contains(1));
}
