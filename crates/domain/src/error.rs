// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Item code is empty or invalid.
    InvalidItemCode(String),
    /// Item name or book title is empty or invalid.
    InvalidItemName(String),
    /// A monetary amount is invalid (negative, non-finite, or out of range).
    InvalidAmount(String),
    /// Customer account number is empty or invalid.
    InvalidAccountNumber(String),
    /// Customer or operator name is empty or invalid.
    InvalidName(String),
    /// Email address is empty or malformed.
    InvalidEmail(String),
    /// Operator role is not recognized.
    InvalidRole(String),
    /// Billing wizard step name is not recognized.
    InvalidStep(String),
    /// Storefront page name is not recognized.
    InvalidPage(String),
    /// The order has no line item with the given catalog id.
    LineItemNotFound {
        /// The catalog id that was looked up.
        item_id: i64,
    },
    /// A customer must be selected before the order can progress.
    CustomerRequired,
    /// The order has no line items.
    EmptyOrder,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidItemCode(msg) => write!(f, "Invalid item code: {msg}"),
            Self::InvalidItemName(msg) => write!(f, "Invalid item name: {msg}"),
            Self::InvalidAmount(msg) => write!(f, "Invalid amount: {msg}"),
            Self::InvalidAccountNumber(msg) => write!(f, "Invalid account number: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidRole(msg) => write!(f, "Invalid role: {msg}"),
            Self::InvalidStep(msg) => write!(f, "Invalid billing step: {msg}"),
            Self::InvalidPage(msg) => write!(f, "Invalid storefront page: {msg}"),
            Self::LineItemNotFound { item_id } => {
                write!(f, "No line item with catalog id {item_id} in the order")
            }
            Self::CustomerRequired => {
                write!(f, "A customer must be selected before continuing")
            }
            Self::EmptyOrder => write!(f, "The order has no line items"),
        }
    }
}

impl std::error::Error for DomainError {}
