// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage layer for the Pahana Bookshop.
//!
//! This crate persists the three long-lived entities — the item catalog,
//! the customer directory, and operator accounts — in `SQLite` via
//! `rusqlite`. An in-memory database is the default (development and
//! tests); a file-backed database is used when a path is supplied.
//!
//! Order drafts, carts, wishlists, and order history are deliberately not
//! persisted: that state is session-scoped and volatile.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use pahana_shop_domain::{Book, Customer, Money};
use rusqlite::{Connection, params};
use std::path::Path;
use tracing::info;

mod data_models;
mod error;
mod schema;
mod seed;

#[cfg(test)]
mod tests;

pub use data_models::OperatorData;
pub use error::PersistenceError;

/// The bcrypt cost used for seeded sample credentials.
///
/// Seed accounts are development fixtures; the low cost keeps in-memory
/// store construction fast. Operator registration through the API uses
/// `bcrypt::DEFAULT_COST`.
const SEED_BCRYPT_COST: u32 = 4;

/// Storage adapter for the catalog, customer directory, and operators.
pub struct Persistence {
    conn: Connection,
}

impl Persistence {
    /// Creates a storage adapter backed by an in-memory `SQLite`
    /// database, seeded with the sample catalog, customers, and operator
    /// accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open_in_memory()
            .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;
        let mut store: Self = Self { conn };
        store.initialize()?;
        store.seed_if_empty()?;
        Ok(store)
    }

    /// Creates a storage adapter backed by a `SQLite` database file.
    ///
    /// WAL mode is enabled for better read concurrency. The sample data
    /// is inserted only when the database is empty.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open(path)
            .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;
        let mut store: Self = Self { conn };
        store.initialize()?;
        store.seed_if_empty()?;
        Ok(store)
    }

    /// Creates the schema.
    fn initialize(&mut self) -> Result<(), PersistenceError> {
        schema::initialize(&self.conn)
    }

    /// Inserts the sample data when the store holds no items, customers,
    /// or operators yet.
    fn seed_if_empty(&mut self) -> Result<(), PersistenceError> {
        if self.count_items()? == 0 {
            for book in seed::sample_catalog() {
                self.insert_item(&book)?;
            }
        }
        if self.count_customers()? == 0 {
            for customer in seed::sample_customers() {
                self.insert_customer(&customer)?;
            }
        }
        if self.count_operators()? == 0 {
            for (user_name, user_email, password, role) in seed::sample_operators() {
                self.create_operator_with_cost(
                    user_name,
                    user_email,
                    password,
                    role,
                    SEED_BCRYPT_COST,
                )?;
            }
            info!("Seeded sample catalog, customers, and operators");
        }
        Ok(())
    }

    // ========================================================================
    // Items
    // ========================================================================

    /// Lists the whole item catalog, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_items(&self) -> Result<Vec<Book>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT item_id, item_code, title, author, description, category, \
             unit_price_cents, stock_quantity FROM items ORDER BY item_id",
        )?;
        let rows = stmt.query_map(params![], row_to_book)?;
        let mut items: Vec<Book> = Vec::new();
        for row in rows {
            items.push(row?);
        }
        Ok(items)
    }

    /// Retrieves a single item by id.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no such item exists.
    pub fn get_item(&self, item_id: i64) -> Result<Book, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT item_id, item_code, title, author, description, category, \
             unit_price_cents, stock_quantity FROM items WHERE item_id = ?1",
        )?;
        stmt.query_row(params![item_id], row_to_book).map_err(|e| {
            if matches!(e, rusqlite::Error::QueryReturnedNoRows) {
                PersistenceError::NotFound(format!("No item with id {item_id}"))
            } else {
                PersistenceError::from(e)
            }
        })
    }

    /// Inserts a new item and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Duplicate` if the item code is taken.
    pub fn insert_item(&mut self, book: &Book) -> Result<i64, PersistenceError> {
        if self.item_code_exists(&book.item_code, None)? {
            return Err(PersistenceError::Duplicate {
                entity: String::from("item"),
                value: book.item_code.clone(),
            });
        }
        self.conn.execute(
            "INSERT INTO items (item_code, title, author, description, category, \
             unit_price_cents, stock_quantity) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                book.item_code,
                book.title,
                book.author,
                book.description,
                book.category,
                book.unit_price.cents(),
                i64::from(book.stock_quantity),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Updates an existing item.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the item does not exist, or `Duplicate` if
    /// the new item code collides with another item.
    pub fn update_item(&mut self, item_id: i64, book: &Book) -> Result<(), PersistenceError> {
        if self.item_code_exists(&book.item_code, Some(item_id))? {
            return Err(PersistenceError::Duplicate {
                entity: String::from("item"),
                value: book.item_code.clone(),
            });
        }
        let changed: usize = self.conn.execute(
            "UPDATE items SET item_code = ?1, title = ?2, author = ?3, description = ?4, \
             category = ?5, unit_price_cents = ?6, stock_quantity = ?7 WHERE item_id = ?8",
            params![
                book.item_code,
                book.title,
                book.author,
                book.description,
                book.category,
                book.unit_price.cents(),
                i64::from(book.stock_quantity),
                item_id,
            ],
        )?;
        if changed == 0 {
            return Err(PersistenceError::NotFound(format!(
                "No item with id {item_id}"
            )));
        }
        Ok(())
    }

    /// Deletes an item by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the item does not exist.
    pub fn delete_item(&mut self, item_id: i64) -> Result<(), PersistenceError> {
        let changed: usize = self
            .conn
            .execute("DELETE FROM items WHERE item_id = ?1", params![item_id])?;
        if changed == 0 {
            return Err(PersistenceError::NotFound(format!(
                "No item with id {item_id}"
            )));
        }
        Ok(())
    }

    /// Counts the items in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn count_items(&self) -> Result<i64, PersistenceError> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM items", params![], |row| row.get(0))?;
        Ok(count)
    }

    fn item_code_exists(
        &self,
        item_code: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, PersistenceError> {
        let count: i64 = match exclude_id {
            Some(id) => self.conn.query_row(
                "SELECT COUNT(*) FROM items WHERE item_code = ?1 AND item_id != ?2",
                params![item_code, id],
                |row| row.get(0),
            )?,
            None => self.conn.query_row(
                "SELECT COUNT(*) FROM items WHERE item_code = ?1",
                params![item_code],
                |row| row.get(0),
            )?,
        };
        Ok(count > 0)
    }

    // ========================================================================
    // Customers
    // ========================================================================

    /// Lists the whole customer directory, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_customers(&self) -> Result<Vec<Customer>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT customer_id, account_number, name, address, telephone, email \
             FROM customers ORDER BY customer_id",
        )?;
        let rows = stmt.query_map(params![], row_to_customer)?;
        let mut customers: Vec<Customer> = Vec::new();
        for row in rows {
            customers.push(row?);
        }
        Ok(customers)
    }

    /// Retrieves a single customer by id.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no such customer exists.
    pub fn get_customer(&self, customer_id: i64) -> Result<Customer, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT customer_id, account_number, name, address, telephone, email \
             FROM customers WHERE customer_id = ?1",
        )?;
        stmt.query_row(params![customer_id], row_to_customer)
            .map_err(|e| {
                if matches!(e, rusqlite::Error::QueryReturnedNoRows) {
                    PersistenceError::NotFound(format!("No customer with id {customer_id}"))
                } else {
                    PersistenceError::from(e)
                }
            })
    }

    /// Inserts a new customer and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Duplicate` if the account number is
    /// taken.
    pub fn insert_customer(&mut self, customer: &Customer) -> Result<i64, PersistenceError> {
        if self.account_number_exists(&customer.account_number, None)? {
            return Err(PersistenceError::Duplicate {
                entity: String::from("customer"),
                value: customer.account_number.clone(),
            });
        }
        self.conn.execute(
            "INSERT INTO customers (account_number, name, address, telephone, email) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                customer.account_number,
                customer.name,
                customer.address,
                customer.telephone,
                customer.email,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Updates an existing customer.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the customer does not exist, or `Duplicate`
    /// if the new account number collides with another customer.
    pub fn update_customer(
        &mut self,
        customer_id: i64,
        customer: &Customer,
    ) -> Result<(), PersistenceError> {
        if self.account_number_exists(&customer.account_number, Some(customer_id))? {
            return Err(PersistenceError::Duplicate {
                entity: String::from("customer"),
                value: customer.account_number.clone(),
            });
        }
        let changed: usize = self.conn.execute(
            "UPDATE customers SET account_number = ?1, name = ?2, address = ?3, \
             telephone = ?4, email = ?5 WHERE customer_id = ?6",
            params![
                customer.account_number,
                customer.name,
                customer.address,
                customer.telephone,
                customer.email,
                customer_id,
            ],
        )?;
        if changed == 0 {
            return Err(PersistenceError::NotFound(format!(
                "No customer with id {customer_id}"
            )));
        }
        Ok(())
    }

    /// Deletes a customer by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the customer does not exist.
    pub fn delete_customer(&mut self, customer_id: i64) -> Result<(), PersistenceError> {
        let changed: usize = self.conn.execute(
            "DELETE FROM customers WHERE customer_id = ?1",
            params![customer_id],
        )?;
        if changed == 0 {
            return Err(PersistenceError::NotFound(format!(
                "No customer with id {customer_id}"
            )));
        }
        Ok(())
    }

    /// Counts the customers in the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn count_customers(&self) -> Result<i64, PersistenceError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM customers",
            params![],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    fn account_number_exists(
        &self,
        account_number: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, PersistenceError> {
        let count: i64 = match exclude_id {
            Some(id) => self.conn.query_row(
                "SELECT COUNT(*) FROM customers WHERE account_number = ?1 AND customer_id != ?2",
                params![account_number, id],
                |row| row.get(0),
            )?,
            None => self.conn.query_row(
                "SELECT COUNT(*) FROM customers WHERE account_number = ?1",
                params![account_number],
                |row| row.get(0),
            )?,
        };
        Ok(count > 0)
    }

    // ========================================================================
    // Operators
    // ========================================================================

    /// Creates a new operator with a bcrypt-hashed password.
    ///
    /// # Arguments
    ///
    /// * `user_name` - The operator's display name
    /// * `user_email` - The login email (unique)
    /// * `password` - The plain-text password (will be hashed)
    /// * `role` - The role ("admin" or "user")
    ///
    /// # Errors
    ///
    /// Returns `Duplicate` if the email is taken, or a hashing error.
    pub fn create_operator(
        &mut self,
        user_name: &str,
        user_email: &str,
        password: &str,
        role: &str,
    ) -> Result<i64, PersistenceError> {
        self.create_operator_with_cost(user_name, user_email, password, role, bcrypt::DEFAULT_COST)
    }

    fn create_operator_with_cost(
        &mut self,
        user_name: &str,
        user_email: &str,
        password: &str,
        role: &str,
        cost: u32,
    ) -> Result<i64, PersistenceError> {
        let normalized_email: String = user_email.trim().to_lowercase();
        if self.get_operator_by_email(&normalized_email)?.is_some() {
            return Err(PersistenceError::Duplicate {
                entity: String::from("operator"),
                value: normalized_email,
            });
        }
        let password_hash: String = bcrypt::hash(password, cost)?;
        let created_at: String = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .map_err(|e| PersistenceError::QueryError(e.to_string()))?;
        self.conn.execute(
            "INSERT INTO operators (user_name, password_hash, role, user_email, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![user_name, password_hash, role, normalized_email, created_at],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Retrieves an operator by login email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn get_operator_by_email(
        &self,
        user_email: &str,
    ) -> Result<Option<OperatorData>, PersistenceError> {
        let normalized_email: String = user_email.trim().to_lowercase();
        let mut stmt = self.conn.prepare(
            "SELECT operator_id, user_name, password_hash, role, user_email, created_at \
             FROM operators WHERE user_email = ?1",
        )?;
        let result = stmt.query_row(params![normalized_email], |row| {
            Ok(OperatorData {
                operator_id: row.get(0)?,
                user_name: row.get(1)?,
                password_hash: row.get(2)?,
                role: row.get(3)?,
                user_email: row.get(4)?,
                created_at: row.get(5)?,
            })
        });
        match result {
            Ok(operator) => Ok(Some(operator)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(PersistenceError::from(e)),
        }
    }

    /// Counts the registered operators.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn count_operators(&self) -> Result<i64, PersistenceError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM operators",
            params![],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Verifies a password against a stored bcrypt hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the hash is malformed.
    pub fn verify_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, PersistenceError> {
        Ok(bcrypt::verify(password, password_hash)?)
    }
}

/// Maps an item row to a `Book`.
fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    let item_id: i64 = row.get(0)?;
    let item_code: String = row.get(1)?;
    let stock: i64 = row.get(7)?;
    Ok(Book::with_id(
        item_id,
        &item_code,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        Money::from_cents(row.get(6)?),
        u32::try_from(stock).unwrap_or(0),
    ))
}

/// Maps a customer row to a `Customer`.
fn row_to_customer(row: &rusqlite::Row<'_>) -> rusqlite::Result<Customer> {
    let customer_id: i64 = row.get(0)?;
    let account_number: String = row.get(1)?;
    Ok(Customer::with_id(
        customer_id,
        &account_number,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}
