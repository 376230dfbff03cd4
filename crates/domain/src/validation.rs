// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::money::Money;

/// Validates the fields of a catalog item before it is saved.
///
/// # Arguments
///
/// * `item_code` - The item code
/// * `title` - The title or item name
/// * `unit_price` - The unit price
///
/// # Errors
///
/// Returns an error if:
/// - The item code is empty
/// - The title is empty
/// - The unit price is negative
pub fn validate_item_fields(
    item_code: &str,
    title: &str,
    unit_price: Money,
) -> Result<(), DomainError> {
    if item_code.trim().is_empty() {
        return Err(DomainError::InvalidItemCode(String::from(
            "Item code must not be empty",
        )));
    }
    if title.trim().is_empty() {
        return Err(DomainError::InvalidItemName(String::from(
            "Item name must not be empty",
        )));
    }
    if unit_price.is_negative() {
        return Err(DomainError::InvalidAmount(format!(
            "Unit price must not be negative (got {unit_price})"
        )));
    }
    Ok(())
}

/// Validates the fields of a customer before it is saved.
///
/// # Arguments
///
/// * `account_number` - The account number
/// * `name` - The customer's name
/// * `email` - The customer's email address
///
/// # Errors
///
/// Returns an error if:
/// - The account number is empty
/// - The name is empty
/// - The email is empty or malformed
pub fn validate_customer_fields(
    account_number: &str,
    name: &str,
    email: &str,
) -> Result<(), DomainError> {
    if account_number.trim().is_empty() {
        return Err(DomainError::InvalidAccountNumber(String::from(
            "Account number must not be empty",
        )));
    }
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name must not be empty",
        )));
    }
    validate_email(email)
}

/// Validates an email address.
///
/// The check is deliberately shallow: non-empty, contains exactly one
/// `@`, and has text on both sides of it.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address is empty or
/// malformed.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let trimmed: &str = email.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidEmail(String::from(
            "Email must not be empty",
        )));
    }
    let mut parts = trimmed.split('@');
    let local: &str = parts.next().unwrap_or_default();
    let domain: Option<&str> = parts.next();
    if local.is_empty() || parts.next().is_some() {
        return Err(DomainError::InvalidEmail(format!(
            "'{trimmed}' is not a valid email address"
        )));
    }
    match domain {
        Some(d) if !d.is_empty() => Ok(()),
        _ => Err(DomainError::InvalidEmail(format!(
            "'{trimmed}' is not a valid email address"
        ))),
    }
}
