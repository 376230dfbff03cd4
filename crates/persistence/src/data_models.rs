// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A registered operator row.
///
/// The password is stored only as a bcrypt hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorData {
    /// The canonical numeric identifier.
    pub operator_id: i64,
    /// The operator's display name.
    pub user_name: String,
    /// The bcrypt hash of the operator's password.
    pub password_hash: String,
    /// The operator's role ("admin" or "user").
    pub role: String,
    /// The operator's email address (unique, login identifier).
    pub user_email: String,
    /// When the operator was registered (ISO 8601).
    pub created_at: String,
}
