// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operator authentication.

use crate::error::AuthError;
use pahana_shop_domain::DomainError;
use pahana_shop_persistence::{OperatorData, Persistence};
use std::str::FromStr;

/// Operator roles.
///
/// Admins land on the back-office dashboard; regular users land on the
/// storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Back-office operator with catalog and billing authority.
    Admin,
    /// Storefront shopper account.
    User,
}

impl Role {
    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(DomainError::InvalidRole(format!(
                "Unknown role: {other}. Must be 'admin' or 'user'"
            ))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An operator whose credentials have been verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedOperator {
    /// The operator's canonical id.
    pub operator_id: i64,
    /// The operator's display name.
    pub name: String,
    /// The operator's login email.
    pub email: String,
    /// The operator's role.
    pub role: Role,
}

/// Credential verification against the operator table.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Verifies an email/password pair.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The storage layer holding operator accounts
    /// * `email` - The login email
    /// * `password` - The plain-text password to verify
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` if the email is unknown,
    /// the password does not match, or the stored role is unreadable.
    /// Unknown email and wrong password are deliberately reported with
    /// the same message.
    pub fn login(
        persistence: &Persistence,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedOperator, AuthError> {
        let operator: OperatorData = persistence
            .get_operator_by_email(email)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Credential lookup failed: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid email or password"),
            })?;

        let verified: bool = persistence
            .verify_password(password, &operator.password_hash)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Credential verification failed: {e}"),
            })?;
        if !verified {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Invalid email or password"),
            });
        }

        let role: Role =
            Role::from_str(&operator.role).map_err(|e| AuthError::AuthenticationFailed {
                reason: e.to_string(),
            })?;

        Ok(AuthenticatedOperator {
            operator_id: operator.operator_id,
            name: operator.user_name,
            email: operator.user_email,
            role,
        })
    }
}

/// Generates a session token for billing and cart sessions.
///
/// Tokens only need to be unique within one server process; a timestamp
/// plus a random suffix is sufficient.
#[must_use]
pub fn generate_session_token() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp: u128 = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    format!("session_{timestamp}_{}", rand::random::<u64>())
}
