// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password and registration policy validation.
//!
//! These checks run before any storage call; a violation leaves the
//! submitted form intact for correction.

use thiserror::Error;

/// Registration policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// A required field was left empty.
    #[error("Please fill in the {field} field")]
    MissingField {
        /// The empty field.
        field: String,
    },

    /// Password is too short.
    #[error("Password must be at least {min_length} characters long")]
    TooShort {
        /// The minimum accepted length.
        min_length: usize,
    },

    /// Password and confirmation do not match.
    #[error("Passwords do not match")]
    ConfirmationMismatch,

    /// The terms and conditions were not accepted.
    #[error("Please agree to the terms and conditions")]
    TermsNotAccepted,
}

/// Registration policy configuration.
pub struct PasswordPolicy {
    /// Minimum password length.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 6 }
    }
}

impl PasswordPolicy {
    /// Validates a registration form against the policy.
    ///
    /// # Arguments
    ///
    /// * `user_name` - The requested display name
    /// * `user_email` - The login email
    /// * `password` - The password
    /// * `confirmation` - The password confirmation, when the form
    ///   collected one
    /// * `agree_to_terms` - Whether the terms checkbox was ticked, when
    ///   the form collected one
    ///
    /// # Errors
    ///
    /// Returns a `PasswordPolicyError` describing the first violated
    /// rule.
    pub fn validate(
        &self,
        user_name: &str,
        user_email: &str,
        password: &str,
        confirmation: Option<&str>,
        agree_to_terms: Option<bool>,
    ) -> Result<(), PasswordPolicyError> {
        for (field, value) in [
            ("name", user_name),
            ("email", user_email),
            ("password", password),
        ] {
            if value.trim().is_empty() {
                return Err(PasswordPolicyError::MissingField {
                    field: field.to_string(),
                });
            }
        }

        if password.len() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }

        if let Some(confirmation) = confirmation
            && confirmation != password
        {
            return Err(PasswordPolicyError::ConfirmationMismatch);
        }

        if agree_to_terms == Some(false) {
            return Err(PasswordPolicyError::TermsNotAccepted);
        }

        Ok(())
    }
}
