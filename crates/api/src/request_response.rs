// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Wire field names are camelCase, matching the REST contract the
//! screens consume (`customerName`, `accountNumber`, `itemCode`, ...).
//! Prices cross the wire as decimal dollars and are held internally as
//! integer cents.

use pahana_shop::OrderDraft;
use pahana_shop_domain::{
    Book, CompletedOrder, ContactSnapshot, Customer, LineItem, OrderTotals,
};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;

/// A customer as presented over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    /// The canonical customer id.
    pub customer_id: i64,
    /// The unique account number.
    pub account_number: String,
    /// The customer's name.
    pub customer_name: String,
    /// The postal address.
    pub customer_address: String,
    /// The telephone number.
    pub contact_number: String,
    /// The email address.
    pub customer_email: String,
}

/// Request to create a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCustomerRequest {
    /// The account number. Generated when omitted.
    #[serde(default)]
    pub account_number: Option<String>,
    /// The customer's name.
    pub customer_name: String,
    /// The postal address.
    #[serde(default)]
    pub customer_address: String,
    /// The telephone number.
    #[serde(default)]
    pub contact_number: String,
    /// The email address.
    pub customer_email: String,
}

/// Request to update an existing customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    /// The canonical customer id.
    pub customer_id: i64,
    /// The account number.
    pub account_number: String,
    /// The customer's name.
    pub customer_name: String,
    /// The postal address.
    #[serde(default)]
    pub customer_address: String,
    /// The telephone number.
    #[serde(default)]
    pub contact_number: String,
    /// The email address.
    pub customer_email: String,
}

/// A catalog item as presented over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInfo {
    /// The canonical item id.
    pub item_id: i64,
    /// The unique item code.
    pub item_code: String,
    /// The title or item name.
    pub item_name: String,
    /// The author, empty for non-book items.
    pub author: String,
    /// A short description.
    pub description: String,
    /// The category.
    pub category: String,
    /// The unit price in decimal dollars.
    pub item_price: f64,
    /// Units in stock.
    pub quantity: u32,
}

/// Request to create a catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveItemRequest {
    /// The unique item code.
    pub item_code: String,
    /// The title or item name.
    pub item_name: String,
    /// The author, empty for non-book items.
    #[serde(default)]
    pub author: String,
    /// A short description.
    #[serde(default)]
    pub description: String,
    /// The category.
    #[serde(default)]
    pub category: String,
    /// The unit price in decimal dollars.
    pub item_price: f64,
    /// Units in stock.
    #[serde(default)]
    pub quantity: u32,
}

/// Request to update an existing catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    /// The canonical item id.
    pub item_id: i64,
    /// The unique item code.
    pub item_code: String,
    /// The title or item name.
    pub item_name: String,
    /// The author, empty for non-book items.
    #[serde(default)]
    pub author: String,
    /// A short description.
    #[serde(default)]
    pub description: String,
    /// The category.
    #[serde(default)]
    pub category: String,
    /// The unit price in decimal dollars.
    pub item_price: f64,
    /// Units in stock.
    #[serde(default)]
    pub quantity: u32,
}

/// Request to register an operator account.
///
/// The success response body is the literal text `saved`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    /// The requested display name.
    pub user_name: String,
    /// The password.
    pub user_password: String,
    /// The password confirmation, when the form collected one.
    #[serde(default)]
    pub confirm_password: Option<String>,
    /// The requested role ("admin" or "user").
    pub role: String,
    /// The login email.
    pub user_email: String,
    /// Whether the terms checkbox was ticked, when the form collected
    /// one.
    #[serde(default)]
    pub agree_to_terms: Option<bool>,
}

/// Request to verify operator credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The login email.
    pub email: String,
    /// The password.
    pub password: String,
}

/// Response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The operator's display name.
    pub name: String,
    /// The operator's role; admins are routed to the dashboard, users to
    /// the storefront.
    pub role: String,
    /// The operator's login email.
    pub email: String,
}

/// One month of the sample books-sold series shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySales {
    /// The month label.
    pub month: String,
    /// Books sold that month.
    pub sold: u32,
}

/// Dashboard statistics: live counts plus the sample monthly series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    /// Customers in the directory.
    pub customers: i64,
    /// Items in the catalog.
    pub books: i64,
    /// Orders completed since the server started.
    pub orders: usize,
    /// Revenue across completed orders, in decimal dollars.
    pub revenue: f64,
    /// Revenue formatted for display.
    pub revenue_display: String,
    /// The sample monthly books-sold series.
    pub books_sold: Vec<MonthlySales>,
}

/// Response when a billing or cart session is started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionResponse {
    /// The generated session token.
    pub session_id: String,
}

/// A command submitted to a billing or cart session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum BillingCommandRequest {
    /// Select the customer the bill is for.
    #[serde(rename_all = "camelCase")]
    SelectCustomer {
        /// The directory id of the customer.
        customer_id: i64,
    },
    /// Clear the selected customer.
    ClearCustomer,
    /// Add one unit of a catalog item.
    #[serde(rename_all = "camelCase")]
    AddItem {
        /// The catalog id.
        item_id: i64,
    },
    /// Change a line item's quantity by a relative delta.
    #[serde(rename_all = "camelCase")]
    AdjustQuantity {
        /// The catalog id.
        item_id: i64,
        /// The signed change.
        delta: i64,
    },
    /// Set a line item's quantity to an absolute target.
    #[serde(rename_all = "camelCase")]
    SetQuantity {
        /// The catalog id.
        item_id: i64,
        /// The target quantity.
        quantity: i64,
    },
    /// Remove a line item.
    #[serde(rename_all = "camelCase")]
    RemoveItem {
        /// The catalog id.
        item_id: i64,
    },
    /// Set or clear the bill notes.
    Notes {
        /// The notes text. Blank clears.
        notes: String,
    },
    /// Advance the wizard one step.
    Advance,
    /// Go back one wizard step.
    Back,
    /// Reset the draft to its initial state.
    Reset,
}

/// A line item as presented over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInfo {
    /// The catalog id.
    pub item_id: i64,
    /// The display name.
    pub name: String,
    /// The unit price in decimal dollars.
    pub unit_price: f64,
    /// The unit count.
    pub quantity: u32,
    /// The line total in decimal dollars.
    pub line_total: f64,
}

/// Derived totals as presented over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsInfo {
    /// The subtotal in decimal dollars.
    pub subtotal: f64,
    /// The tax amount in decimal dollars.
    pub tax: f64,
    /// The tax rate label (e.g., "10%").
    pub tax_rate: String,
    /// The shipping fee in decimal dollars; absent for workflows without
    /// shipping, zero means free.
    pub shipping: Option<f64>,
    /// The grand total in decimal dollars.
    pub total: f64,
}

/// An order draft as presented over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftInfo {
    /// The wizard step.
    pub step: String,
    /// The selected customer, if any.
    pub customer: Option<CustomerInfo>,
    /// The line items in display order.
    pub line_items: Vec<LineItemInfo>,
    /// The bill notes, if any.
    pub notes: Option<String>,
    /// The derived totals.
    pub totals: TotalsInfo,
}

/// A contact snapshot as presented over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// The contact's name.
    pub name: String,
    /// The contact's email address.
    pub email: String,
    /// The contact's phone number.
    pub phone: String,
    /// The shipping or billing address.
    pub address: String,
    /// The directory account number, if any.
    pub account_number: Option<String>,
}

/// A completed order as presented over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedOrderInfo {
    /// The generated order identifier.
    pub order_id: String,
    /// The completion timestamp (RFC 3339).
    pub date: String,
    /// The customer/contact snapshot.
    pub customer: ContactInfo,
    /// The ordered line items.
    pub items: Vec<LineItemInfo>,
    /// The totals at completion time.
    pub totals: TotalsInfo,
    /// The bill notes, if any.
    pub notes: Option<String>,
}

/// Request to update the storefront shopper profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    /// The shopper's name.
    pub name: String,
    /// The shopper's email address.
    pub email: String,
    /// The shopper's phone number.
    #[serde(default)]
    pub phone: String,
    /// The shipping address.
    #[serde(default)]
    pub address: String,
}

/// Request to toggle a book on the wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistToggleRequest {
    /// The catalog id of the book.
    pub item_id: i64,
}

/// Converts a directory customer to its wire form.
#[must_use]
pub fn customer_info(customer: &Customer) -> CustomerInfo {
    CustomerInfo {
        customer_id: customer.customer_id.unwrap_or_default(),
        account_number: customer.account_number.clone(),
        customer_name: customer.name.clone(),
        customer_address: customer.address.clone(),
        contact_number: customer.telephone.clone(),
        customer_email: customer.email.clone(),
    }
}

/// Converts a catalog item to its wire form.
#[must_use]
pub fn item_info(book: &Book) -> ItemInfo {
    ItemInfo {
        item_id: book.item_id.unwrap_or_default(),
        item_code: book.item_code.clone(),
        item_name: book.title.clone(),
        author: book.author.clone(),
        description: book.description.clone(),
        category: book.category.clone(),
        item_price: book.unit_price.to_dollars(),
        quantity: book.stock_quantity,
    }
}

/// Converts a line item to its wire form.
#[must_use]
pub fn line_item_info(line: &LineItem) -> LineItemInfo {
    LineItemInfo {
        item_id: line.item_id,
        name: line.name.clone(),
        unit_price: line.unit_price.to_dollars(),
        quantity: line.quantity,
        line_total: line.line_total().to_dollars(),
    }
}

/// Converts derived totals to their wire form.
#[must_use]
pub fn totals_info(totals: &OrderTotals) -> TotalsInfo {
    TotalsInfo {
        subtotal: totals.subtotal.to_dollars(),
        tax: totals.tax.to_dollars(),
        tax_rate: totals.tax_percent_label(),
        shipping: totals.shipping.map(pahana_shop_domain::Money::to_dollars),
        total: totals.total.to_dollars(),
    }
}

/// Converts an order draft to its wire form, recomputing the totals.
#[must_use]
pub fn draft_info(draft: &OrderDraft) -> DraftInfo {
    DraftInfo {
        step: draft.step.to_string(),
        customer: draft.customer.as_ref().map(customer_info),
        line_items: draft.line_items.iter().map(line_item_info).collect(),
        notes: draft.notes.clone(),
        totals: totals_info(&draft.totals()),
    }
}

/// Converts a contact snapshot to its wire form.
#[must_use]
pub fn contact_info(contact: &ContactSnapshot) -> ContactInfo {
    ContactInfo {
        name: contact.name.clone(),
        email: contact.email.clone(),
        phone: contact.phone.clone(),
        address: contact.address.clone(),
        account_number: contact.account_number.clone(),
    }
}

/// Converts a completed order to its wire form.
#[must_use]
pub fn completed_order_info(order: &CompletedOrder) -> CompletedOrderInfo {
    CompletedOrderInfo {
        order_id: order.order_id.clone(),
        date: order
            .completed_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| order.completed_at.to_string()),
        customer: contact_info(&order.customer),
        items: order.line_items.iter().map(line_item_info).collect(),
        totals: totals_info(&order.totals),
        notes: order.notes.clone(),
    }
}

/// The sample monthly books-sold series shown on the dashboard chart.
#[must_use]
pub fn sample_monthly_sales() -> Vec<MonthlySales> {
    [
        ("Jan", 420),
        ("Feb", 380),
        ("Mar", 510),
        ("Apr", 460),
        ("May", 545),
        ("Jun", 605),
        ("Jul", 580),
        ("Aug", 640),
    ]
    .into_iter()
    .map(|(month, sold)| MonthlySales {
        month: month.to_string(),
        sold,
    })
    .collect()
}
