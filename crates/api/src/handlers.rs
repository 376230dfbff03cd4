// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions bridging the HTTP boundary to the order engine
//! and the store.
//!
//! Every handler validates first and touches storage last, so a rejected
//! request leaves no partial state behind.

use crate::auth::AuthenticationService;
use crate::error::{
    ApiError, translate_domain_error, translate_persistence_error,
};
use crate::filtering::{filter_customers, filter_items};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    BillingCommandRequest, CustomerInfo, DashboardStatsResponse, ItemInfo, LoginRequest,
    LoginResponse, RegisterUserRequest, SaveCustomerRequest, SaveItemRequest,
    UpdateCustomerRequest, UpdateItemRequest, customer_info, item_info, sample_monthly_sales,
};
use pahana_shop::OrderCommand;
use pahana_shop_domain::{
    Book, Customer, Money, validate_customer_fields, validate_item_fields,
};
use pahana_shop_persistence::{Persistence, PersistenceError};
use std::str::FromStr;
use tracing::info;

/// The response body for a successful registration.
const REGISTER_SUCCESS_BODY: &str = "saved";

/// Lists the customer directory, optionally filtered by a search term
/// (name, id, account number, or email).
///
/// # Errors
///
/// Returns an error if the store cannot be queried.
pub fn list_customers(
    store: &Persistence,
    search: Option<&str>,
) -> Result<Vec<CustomerInfo>, ApiError> {
    let customers: Vec<Customer> = store
        .list_customers()
        .map_err(translate_persistence_error)?;
    Ok(filter_customers(&customers, search.unwrap_or(""))
        .into_iter()
        .map(customer_info)
        .collect())
}

/// Creates a customer, generating an account number when none is given.
///
/// # Errors
///
/// Returns an error if validation fails or the account number is taken.
pub fn save_customer(
    store: &mut Persistence,
    request: SaveCustomerRequest,
) -> Result<CustomerInfo, ApiError> {
    let generated: bool = request.account_number.is_none();
    let mut account_number: String = match request.account_number {
        Some(account) => account,
        None => next_account_number(store)?,
    };

    // A generated number can race a concurrent insert; walk forward until
    // a free one is found.
    for _ in 0..1_000 {
        validate_customer_fields(&account_number, &request.customer_name, &request.customer_email)
            .map_err(translate_domain_error)?;
        let customer: Customer = Customer::new(
            &account_number,
            request.customer_name.clone(),
            request.customer_address.clone(),
            request.contact_number.clone(),
            request.customer_email.clone(),
        );
        match store.insert_customer(&customer) {
            Ok(customer_id) => {
                return store
                    .get_customer(customer_id)
                    .map(|saved| customer_info(&saved))
                    .map_err(translate_persistence_error);
            }
            Err(PersistenceError::Duplicate { .. }) if generated => {
                account_number = bump_account_number(&account_number);
            }
            Err(other) => return Err(translate_persistence_error(other)),
        }
    }
    Err(ApiError::Internal {
        message: String::from("Could not allocate a free account number"),
    })
}

/// Updates an existing customer.
///
/// # Errors
///
/// Returns an error if validation fails, the customer does not exist, or
/// the account number is taken by another customer.
pub fn update_customer(
    store: &mut Persistence,
    request: UpdateCustomerRequest,
) -> Result<CustomerInfo, ApiError> {
    validate_customer_fields(
        &request.account_number,
        &request.customer_name,
        &request.customer_email,
    )
    .map_err(translate_domain_error)?;
    let customer: Customer = Customer::new(
        &request.account_number,
        request.customer_name,
        request.customer_address,
        request.contact_number,
        request.customer_email,
    );
    store
        .update_customer(request.customer_id, &customer)
        .map_err(translate_persistence_error)?;
    store
        .get_customer(request.customer_id)
        .map(|saved| customer_info(&saved))
        .map_err(translate_persistence_error)
}

/// Deletes a customer.
///
/// # Errors
///
/// Returns an error if the customer does not exist.
pub fn delete_customer(store: &mut Persistence, customer_id: i64) -> Result<(), ApiError> {
    store
        .delete_customer(customer_id)
        .map_err(translate_persistence_error)
}

/// Lists the item catalog, optionally filtered by a search term (title,
/// author, code, description, or category).
///
/// # Errors
///
/// Returns an error if the store cannot be queried.
pub fn list_items(store: &Persistence, search: Option<&str>) -> Result<Vec<ItemInfo>, ApiError> {
    let items: Vec<Book> = store.list_items().map_err(translate_persistence_error)?;
    Ok(filter_items(&items, search.unwrap_or(""))
        .into_iter()
        .map(item_info)
        .collect())
}

/// Creates a catalog item.
///
/// # Errors
///
/// Returns an error if validation fails or the item code is taken.
pub fn save_item(store: &mut Persistence, request: SaveItemRequest) -> Result<ItemInfo, ApiError> {
    let unit_price: Money =
        Money::from_dollars(request.item_price).map_err(translate_domain_error)?;
    validate_item_fields(&request.item_code, &request.item_name, unit_price)
        .map_err(translate_domain_error)?;
    let book: Book = Book::new(
        &request.item_code,
        request.item_name,
        request.author,
        request.description,
        request.category,
        unit_price,
        request.quantity,
    );
    let item_id: i64 = store
        .insert_item(&book)
        .map_err(translate_persistence_error)?;
    store
        .get_item(item_id)
        .map(|saved| item_info(&saved))
        .map_err(translate_persistence_error)
}

/// Updates an existing catalog item.
///
/// # Errors
///
/// Returns an error if validation fails, the item does not exist, or the
/// item code is taken by another item.
pub fn update_item(
    store: &mut Persistence,
    request: UpdateItemRequest,
) -> Result<ItemInfo, ApiError> {
    let unit_price: Money =
        Money::from_dollars(request.item_price).map_err(translate_domain_error)?;
    validate_item_fields(&request.item_code, &request.item_name, unit_price)
        .map_err(translate_domain_error)?;
    let book: Book = Book::new(
        &request.item_code,
        request.item_name,
        request.author,
        request.description,
        request.category,
        unit_price,
        request.quantity,
    );
    store
        .update_item(request.item_id, &book)
        .map_err(translate_persistence_error)?;
    store
        .get_item(request.item_id)
        .map(|saved| item_info(&saved))
        .map_err(translate_persistence_error)
}

/// Deletes a catalog item.
///
/// # Errors
///
/// Returns an error if the item does not exist.
pub fn delete_item(store: &mut Persistence, item_id: i64) -> Result<(), ApiError> {
    store
        .delete_item(item_id)
        .map_err(translate_persistence_error)
}

/// Registers an operator account.
///
/// On success the HTTP response body is the literal text `saved`.
///
/// # Errors
///
/// Returns an error if the registration form violates the policy, the
/// role is unknown, or the email is already registered.
pub fn register_operator(
    store: &mut Persistence,
    request: RegisterUserRequest,
) -> Result<&'static str, ApiError> {
    PasswordPolicy::default().validate(
        &request.user_name,
        &request.user_email,
        &request.user_password,
        request.confirm_password.as_deref(),
        request.agree_to_terms,
    )?;
    let role: crate::auth::Role =
        crate::auth::Role::from_str(&request.role).map_err(translate_domain_error)?;
    pahana_shop_domain::validate_email(&request.user_email).map_err(translate_domain_error)?;

    let operator_id: i64 = store
        .create_operator(
            &request.user_name,
            &request.user_email,
            &request.user_password,
            role.as_str(),
        )
        .map_err(translate_persistence_error)?;

    info!(
        operator_id = operator_id,
        email = %request.user_email,
        role = %role,
        "Registered operator"
    );
    Ok(REGISTER_SUCCESS_BODY)
}

/// Verifies operator credentials.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` on bad credentials.
pub fn login(store: &Persistence, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let operator = AuthenticationService::login(store, &request.email, &request.password)
        .map_err(ApiError::from)?;
    info!(email = %operator.email, role = %operator.role, "Operator logged in");
    Ok(LoginResponse {
        name: operator.name,
        role: operator.role.to_string(),
        email: operator.email,
    })
}

/// Assembles the dashboard statistics.
///
/// Customer and item counts are live; completed-order figures come from
/// the server's in-memory ledger; the monthly series is sample data.
///
/// # Errors
///
/// Returns an error if the store cannot be queried.
pub fn dashboard_stats(
    store: &Persistence,
    completed_orders: usize,
    revenue: Money,
) -> Result<DashboardStatsResponse, ApiError> {
    let customers: i64 = store
        .count_customers()
        .map_err(translate_persistence_error)?;
    let books: i64 = store.count_items().map_err(translate_persistence_error)?;
    Ok(DashboardStatsResponse {
        customers,
        books,
        orders: completed_orders,
        revenue: revenue.to_dollars(),
        revenue_display: revenue.to_string(),
        books_sold: sample_monthly_sales(),
    })
}

/// Resolves a wire-level session command into an engine command, looking
/// up catalog items and customers in the store.
///
/// # Errors
///
/// Returns `ResourceNotFound` if a referenced customer or item does not
/// exist.
pub fn resolve_billing_command(
    store: &Persistence,
    request: BillingCommandRequest,
) -> Result<OrderCommand, ApiError> {
    match request {
        BillingCommandRequest::SelectCustomer { customer_id } => {
            let customer: Customer = store
                .get_customer(customer_id)
                .map_err(translate_persistence_error)?;
            Ok(OrderCommand::SelectCustomer { customer })
        }
        BillingCommandRequest::ClearCustomer => Ok(OrderCommand::ClearCustomer),
        BillingCommandRequest::AddItem { item_id } => {
            let book: Book = store
                .get_item(item_id)
                .map_err(translate_persistence_error)?;
            Ok(OrderCommand::AddItem {
                item_id,
                name: book.title,
                unit_price: book.unit_price,
            })
        }
        BillingCommandRequest::AdjustQuantity { item_id, delta } => {
            Ok(OrderCommand::AdjustQuantity { item_id, delta })
        }
        BillingCommandRequest::SetQuantity { item_id, quantity } => {
            Ok(OrderCommand::SetQuantity { item_id, quantity })
        }
        BillingCommandRequest::RemoveItem { item_id } => Ok(OrderCommand::RemoveItem { item_id }),
        BillingCommandRequest::Notes { notes } => Ok(OrderCommand::SetNotes { notes }),
        BillingCommandRequest::Advance => Ok(OrderCommand::Advance),
        BillingCommandRequest::Back => Ok(OrderCommand::Back),
        BillingCommandRequest::Reset => Ok(OrderCommand::Reset),
    }
}

/// Proposes the next sequential account number (`PAH1001`, `PAH1002`,
/// ...), continuing after the current directory size.
fn next_account_number(store: &Persistence) -> Result<String, ApiError> {
    let count: i64 = store
        .count_customers()
        .map_err(translate_persistence_error)?;
    Ok(format!("PAH{}", 1_000 + count + 1))
}

/// Increments the numeric suffix of a generated account number.
fn bump_account_number(account_number: &str) -> String {
    account_number
        .strip_prefix("PAH")
        .and_then(|suffix| suffix.parse::<i64>().ok())
        .map_or_else(
            || format!("{account_number}1"),
            |n| format!("PAH{}", n + 1),
        )
}
