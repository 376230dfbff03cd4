// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod filtering;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedOperator, AuthenticationService, Role, generate_session_token};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use filtering::{filter_customers, filter_items};
pub use handlers::{
    dashboard_stats, delete_customer, delete_item, list_customers, list_items, login,
    register_operator, resolve_billing_command, save_customer, save_item, update_customer,
    update_item,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    BillingCommandRequest, CompletedOrderInfo, ContactInfo, CustomerInfo, DashboardStatsResponse,
    DraftInfo, ItemInfo, LineItemInfo, LoginRequest, LoginResponse, MonthlySales,
    ProfileUpdateRequest, RegisterUserRequest, SaveCustomerRequest, SaveItemRequest,
    StartSessionResponse, TotalsInfo, UpdateCustomerRequest, UpdateItemRequest,
    WishlistToggleRequest, completed_order_info, contact_info, customer_info, draft_info,
    item_info, line_item_info, sample_monthly_sales, totals_info,
};
