// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A monetary amount in US dollars, held as an integer number of cents.
///
/// Keeping amounts integral makes every derived total exact: line totals,
/// subtotals, and percentage-based tax are computed without floating point
/// drift. Decimal dollars appear only at the wire and display boundaries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money {
    /// The amount in cents.
    cents: i64,
}

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self { cents: 0 };

    /// Creates a `Money` from a number of cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a `Money` from a decimal dollar amount, rounding to the
    /// nearest cent.
    ///
    /// # Arguments
    ///
    /// * `dollars` - The decimal dollar amount (e.g., `12.99`)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the value is not finite or
    /// does not fit in the cent range.
    pub fn from_dollars(dollars: f64) -> Result<Self, DomainError> {
        if !dollars.is_finite() {
            return Err(DomainError::InvalidAmount(format!(
                "{dollars} is not a finite number"
            )));
        }
        let rounded: f64 = (dollars * 100.0).round();
        #[allow(clippy::cast_precision_loss)]
        let bound: f64 = i64::MAX as f64;
        if rounded.abs() > bound {
            return Err(DomainError::InvalidAmount(format!(
                "{dollars} is out of range"
            )));
        }
        #[allow(clippy::cast_possible_truncation)]
        let cents: i64 = rounded as i64;
        Ok(Self { cents })
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.cents
    }

    /// Returns the amount as decimal dollars.
    ///
    /// Only for wire and display boundaries; internal arithmetic stays in
    /// cents.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_dollars(self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Returns whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.cents == 0
    }

    /// Returns whether the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.cents < 0
    }

    /// Adds two amounts, saturating at the numeric bounds.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            cents: self.cents.saturating_add(other.cents),
        }
    }

    /// Multiplies the amount by a unit count, saturating at the numeric
    /// bounds.
    #[must_use]
    pub const fn saturating_mul(self, factor: u32) -> Self {
        Self {
            cents: self.cents.saturating_mul(factor as i64),
        }
    }

    /// Applies a percentage expressed in basis points (1% = 100 basis
    /// points), rounding half-up to the nearest cent.
    ///
    /// Callers only apply rates to non-negative subtotals.
    #[must_use]
    pub fn percentage(self, basis_points: u32) -> Self {
        let scaled: i128 = i128::from(self.cents) * i128::from(basis_points) + 5_000;
        #[allow(clippy::cast_possible_truncation)]
        let cents: i64 = (scaled / 10_000) as i64;
        Self { cents }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            let magnitude: i64 = -self.cents;
            write!(f, "-${}.{:02}", magnitude / 100, magnitude % 100)
        } else {
            write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
        }
    }
}
