// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client-style search filtering.
//!
//! Filtering is a pure function over the last successfully fetched list;
//! it never triggers a re-fetch. All matching is case-insensitive
//! substring matching.

use pahana_shop_domain::{Book, Customer};

/// Filters customers by name, numeric id, account number, or email.
///
/// An empty (or all-whitespace) query matches everything.
#[must_use]
pub fn filter_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    let needle: String = query.trim().to_lowercase();
    if needle.is_empty() {
        return customers.iter().collect();
    }
    customers
        .iter()
        .filter(|customer| {
            customer.name.to_lowercase().contains(&needle)
                || customer
                    .customer_id
                    .is_some_and(|id| id.to_string().contains(&needle))
                || customer.account_number.to_lowercase().contains(&needle)
                || customer.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Filters catalog items by title, author, item code, description, or
/// category.
///
/// An empty (or all-whitespace) query matches everything.
#[must_use]
pub fn filter_items<'a>(items: &'a [Book], query: &str) -> Vec<&'a Book> {
    let needle: String = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.author.to_lowercase().contains(&needle)
                || item.item_code.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
        })
        .collect()
}
