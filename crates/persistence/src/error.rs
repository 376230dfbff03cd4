// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur in the storage layer.
#[derive(Debug)]
pub enum PersistenceError {
    /// The database could not be opened or initialized.
    InitializationError(String),
    /// A query or mutation failed.
    QueryError(String),
    /// The requested row does not exist.
    NotFound(String),
    /// A uniqueness rule was violated.
    Duplicate {
        /// The kind of entity (e.g., "item", "customer", "operator").
        entity: String,
        /// The conflicting value.
        value: String,
    },
    /// Password hashing or verification failed.
    PasswordHashError(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InitializationError(msg) => write!(f, "Database initialization failed: {msg}"),
            Self::QueryError(msg) => write!(f, "Database query failed: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Duplicate { entity, value } => {
                write!(f, "Duplicate {entity}: '{value}' already exists")
            }
            Self::PasswordHashError(msg) => write!(f, "Password hashing failed: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<rusqlite::Error> for PersistenceError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::QueryReturnedNoRows => Self::NotFound(String::from(
                "The query returned no rows",
            )),
            other => Self::QueryError(other.to_string()),
        }
    }
}

impl From<bcrypt::BcryptError> for PersistenceError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::PasswordHashError(err.to_string())
    }
}
