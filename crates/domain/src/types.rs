// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Represents the admin billing wizard's current stage.
///
/// Forward progression is gated by the order engine (a selected customer
/// to leave `SelectCustomer`, at least one line item to leave `AddItems`);
/// backward transitions are always permitted and preserve state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BillingStep {
    /// Initial step. A customer must be chosen here.
    #[default]
    SelectCustomer,
    /// Line items are added, adjusted, and removed here.
    AddItems,
    /// The bill is previewed and completed here.
    GenerateBill,
}

impl FromStr for BillingStep {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SelectCustomer" => Ok(Self::SelectCustomer),
            "AddItems" => Ok(Self::AddItems),
            "GenerateBill" => Ok(Self::GenerateBill),
            _ => Err(DomainError::InvalidStep(s.to_string())),
        }
    }
}

impl std::fmt::Display for BillingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BillingStep {
    /// Converts this step to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SelectCustomer => "SelectCustomer",
            Self::AddItems => "AddItems",
            Self::GenerateBill => "GenerateBill",
        }
    }

    /// Returns the next step in wizard order, if any.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::SelectCustomer => Some(Self::AddItems),
            Self::AddItems => Some(Self::GenerateBill),
            Self::GenerateBill => None,
        }
    }

    /// Returns the previous step in wizard order, if any.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::SelectCustomer => None,
            Self::AddItems => Some(Self::SelectCustomer),
            Self::GenerateBill => Some(Self::AddItems),
        }
    }
}

/// Represents a storefront page.
///
/// The storefront pages are independent views, not a strict wizard.
/// Matching on this enum is exhaustive; there is no fall-through page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorefrontPage {
    /// The book catalog.
    #[default]
    Home,
    /// The shopping cart.
    Cart,
    /// The wishlist.
    Wishlist,
    /// The customer profile.
    Profile,
    /// The order history.
    Orders,
}

impl FromStr for StorefrontPage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "cart" => Ok(Self::Cart),
            "wishlist" => Ok(Self::Wishlist),
            "profile" => Ok(Self::Profile),
            "orders" => Ok(Self::Orders),
            _ => Err(DomainError::InvalidPage(s.to_string())),
        }
    }
}

impl std::fmt::Display for StorefrontPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StorefrontPage {
    /// Converts this page to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Cart => "cart",
            Self::Wishlist => "wishlist",
            Self::Profile => "profile",
            Self::Orders => "orders",
        }
    }
}

/// Represents a book (or service item) in the catalog.
///
/// `item_id` is the canonical identifier assigned by the store; `None`
/// indicates the entry has not been persisted yet. Item codes are
/// normalized to uppercase to ensure case-insensitive uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// The canonical numeric identifier assigned by the store.
    pub item_id: Option<i64>,
    /// The item code (e.g., "BK-1001"), unique within the catalog.
    pub item_code: String,
    /// The title (book title or service item name).
    pub title: String,
    /// The author, empty for non-book items.
    pub author: String,
    /// A short description.
    pub description: String,
    /// The category (e.g., "Fantasy", "Services").
    pub category: String,
    /// The unit price.
    pub unit_price: Money,
    /// Units currently in stock.
    pub stock_quantity: u32,
}

impl Book {
    /// Creates a new `Book` without a persisted id.
    ///
    /// # Arguments
    ///
    /// * `item_code` - The item code (will be normalized to uppercase)
    /// * `title` - The title
    /// * `author` - The author, empty for non-book items
    /// * `description` - A short description
    /// * `category` - The category
    /// * `unit_price` - The unit price
    /// * `stock_quantity` - Units in stock
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        item_code: &str,
        title: String,
        author: String,
        description: String,
        category: String,
        unit_price: Money,
        stock_quantity: u32,
    ) -> Self {
        Self {
            item_id: None,
            item_code: item_code.to_uppercase(),
            title,
            author,
            description,
            category,
            unit_price,
            stock_quantity,
        }
    }

    /// Creates a `Book` with an existing persisted id.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn with_id(
        item_id: i64,
        item_code: &str,
        title: String,
        author: String,
        description: String,
        category: String,
        unit_price: Money,
        stock_quantity: u32,
    ) -> Self {
        Self {
            item_id: Some(item_id),
            item_code: item_code.to_uppercase(),
            title,
            author,
            description,
            category,
            unit_price,
            stock_quantity,
        }
    }
}

/// Represents a customer in the directory.
///
/// Account numbers (e.g., "PAH1001") are unique and normalized to
/// uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// The canonical numeric identifier assigned by the store.
    pub customer_id: Option<i64>,
    /// The account number, unique within the directory.
    pub account_number: String,
    /// The customer's name.
    pub name: String,
    /// The postal address.
    pub address: String,
    /// The telephone number.
    pub telephone: String,
    /// The email address.
    pub email: String,
}

impl Customer {
    /// Creates a new `Customer` without a persisted id.
    #[must_use]
    pub fn new(
        account_number: &str,
        name: String,
        address: String,
        telephone: String,
        email: String,
    ) -> Self {
        Self {
            customer_id: None,
            account_number: account_number.to_uppercase(),
            name,
            address,
            telephone,
            email,
        }
    }

    /// Creates a `Customer` with an existing persisted id.
    #[must_use]
    pub fn with_id(
        customer_id: i64,
        account_number: &str,
        name: String,
        address: String,
        telephone: String,
        email: String,
    ) -> Self {
        Self {
            customer_id: Some(customer_id),
            account_number: account_number.to_uppercase(),
            name,
            address,
            telephone,
            email,
        }
    }

    /// Produces the contact snapshot recorded on completed orders.
    #[must_use]
    pub fn contact_snapshot(&self) -> ContactSnapshot {
        ContactSnapshot {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.telephone.clone(),
            address: self.address.clone(),
            account_number: Some(self.account_number.clone()),
        }
    }
}

/// The customer/contact details frozen onto a completed order.
///
/// Storefront checkouts carry the shopper profile, which has no account
/// number; admin bills carry the full directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSnapshot {
    /// The contact's name.
    pub name: String,
    /// The contact's email address.
    pub email: String,
    /// The contact's phone number.
    pub phone: String,
    /// The shipping or billing address.
    pub address: String,
    /// The directory account number, if the contact came from the
    /// customer directory.
    pub account_number: Option<String>,
}

/// One catalog entry plus its quantity within an in-progress order.
///
/// Invariant: `quantity >= 1` always. An item whose quantity would drop
/// below 1 is removed from the order, never clamped to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The catalog id this line refers to.
    pub item_id: i64,
    /// The display name captured when the line was created.
    pub name: String,
    /// The unit price captured when the line was created.
    pub unit_price: Money,
    /// The unit count (always at least 1).
    pub quantity: u32,
}

impl LineItem {
    /// Creates a new line item with quantity 1.
    #[must_use]
    pub const fn new(item_id: i64, name: String, unit_price: Money) -> Self {
        Self {
            item_id,
            name,
            unit_price,
            quantity: 1,
        }
    }

    /// Returns the line total (`unit_price` × `quantity`).
    #[must_use]
    pub const fn line_total(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// The derived totals of an order.
///
/// Totals are pure functions of the line items and the workflow's pricing
/// policy; they are recomputed on demand and never independently mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// The sum of all line totals.
    pub subtotal: Money,
    /// The tax amount (`subtotal` × the workflow's rate).
    pub tax: Money,
    /// The shipping fee. `None` for workflows without shipping (the admin
    /// wizard); `Some(Money::ZERO)` means free shipping.
    pub shipping: Option<Money>,
    /// The grand total (`subtotal + tax + shipping`).
    pub total: Money,
    /// The tax rate applied, in basis points (1% = 100).
    pub tax_rate_basis_points: u32,
}

impl OrderTotals {
    /// Formats the tax rate as a percent label (e.g., "10%").
    #[must_use]
    pub fn tax_percent_label(&self) -> String {
        if self.tax_rate_basis_points % 100 == 0 {
            format!("{}%", self.tax_rate_basis_points / 100)
        } else {
            format!("{}%", f64::from(self.tax_rate_basis_points) / 100.0)
        }
    }
}

/// An immutable snapshot of an order taken at completion time.
///
/// Created once at the complete/generate action, recorded in an in-memory
/// order history, and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedOrder {
    /// The generated order identifier (time-derived).
    pub order_id: String,
    /// When the order was completed.
    #[serde(with = "time::serde::rfc3339")]
    pub completed_at: OffsetDateTime,
    /// The customer/contact snapshot.
    pub customer: ContactSnapshot,
    /// A copy of the line items at completion time.
    pub line_items: Vec<LineItem>,
    /// A copy of the computed totals at completion time.
    pub totals: OrderTotals,
    /// Optional free-text notes.
    pub notes: Option<String>,
}
