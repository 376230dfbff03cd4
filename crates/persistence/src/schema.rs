// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use rusqlite::Connection;

/// The schema for the three persistent tables.
///
/// Order drafts, carts, wishlists, and order history are deliberately not
/// here: that state is volatile and lives only in server memory.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS items (
    item_id          INTEGER PRIMARY KEY AUTOINCREMENT,
    item_code        TEXT    NOT NULL UNIQUE,
    title            TEXT    NOT NULL,
    author           TEXT    NOT NULL DEFAULT '',
    description      TEXT    NOT NULL DEFAULT '',
    category         TEXT    NOT NULL DEFAULT '',
    unit_price_cents INTEGER NOT NULL,
    stock_quantity   INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS customers (
    customer_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    account_number TEXT    NOT NULL UNIQUE,
    name           TEXT    NOT NULL,
    address        TEXT    NOT NULL DEFAULT '',
    telephone      TEXT    NOT NULL DEFAULT '',
    email          TEXT    NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS operators (
    operator_id   INTEGER PRIMARY KEY AUTOINCREMENT,
    user_name     TEXT    NOT NULL,
    password_hash TEXT    NOT NULL,
    role          TEXT    NOT NULL,
    user_email    TEXT    NOT NULL UNIQUE,
    created_at    TEXT    NOT NULL
);
";

/// Creates the tables if they do not exist yet.
///
/// # Errors
///
/// Returns an error if the schema statements fail.
pub fn initialize(conn: &Connection) -> Result<(), PersistenceError> {
    conn.execute_batch(SCHEMA)
        .map_err(|e| PersistenceError::InitializationError(e.to_string()))
}
