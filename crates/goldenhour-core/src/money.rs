//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A sales ledger summed as doubles drifts by cents over a busy day.     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    RM10.99 is stored as 1099. Totals, daily aggregates, and the        │
//! │    price column of the stock table all stay exact.                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use goldenhour_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // RM10.99
//!
//! // Parse from the stock table's decimal text column
//! let parsed = Money::parse("10.99").unwrap();
//! assert_eq!(parsed, price);
//!
//! // Arithmetic operations
//! let line_total = price.line_total(3); // RM32.97
//! assert_eq!(line_total.cents(), 3297);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for diagnostic serialization
///
/// ## Where Money Is Used
/// ```text
/// StockModel.price ──► ValidatedSale.total ──► SaleRecord.total
///                                         └──► receipt artifact text
/// SalesLedger.daily_total ──► daily report artifact
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use goldenhour_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents RM10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parses a decimal text amount ("10", "10.5", "10.99") into Money.
    ///
    /// This is the format of the price column in the stock table, so the
    /// parser accepts at most two fraction digits and rejects everything
    /// else rather than guessing.
    ///
    /// ## Example
    /// ```rust
    /// use goldenhour_core::money::Money;
    ///
    /// assert_eq!(Money::parse("10").unwrap().cents(), 1000);
    /// assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
    /// assert_eq!(Money::parse("10.99").unwrap().cents(), 1099);
    /// assert!(Money::parse("10.995").is_err());
    /// assert!(Money::parse("abc").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        let invalid = || ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: "must be a decimal number with at most 2 fraction digits".to_string(),
        };

        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, text),
        };

        let (major_text, minor_text) = match digits.split_once('.') {
            // A dot with nothing after it ("10.") is not a decimal.
            Some((_, "")) => return Err(invalid()),
            Some((m, f)) => (m, f),
            None => (digits, ""),
        };

        if major_text.is_empty() || minor_text.len() > 2 {
            return Err(invalid());
        }
        if !major_text.chars().all(|c| c.is_ascii_digit())
            || !minor_text.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let major: i64 = major_text.parse().map_err(|_| invalid())?;
        // "10.5" means 50 cents, not 5
        let minor: i64 = match minor_text.len() {
            0 => 0,
            1 => minor_text.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => minor_text.parse().map_err(|_| invalid())?,
        };

        Ok(Money(sign * (major * 100 + minor)))
    }

    /// Multiplies the unit price by a quantity to produce a line total.
    ///
    /// ## Example
    /// ```rust
    /// use goldenhour_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1000); // RM10.00
    /// assert_eq!(unit_price.line_total(3).cents(), 3000); // RM30.00
    /// ```
    #[inline]
    pub const fn line_total(&self, quantity: i64) -> Self {
        Money(self.0 * quantity)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the plain decimal form ("10.99", "-5.50").
///
/// ## Note
/// The currency symbol is a presentation concern: the console app prefixes
/// the configured symbol, and the same text round-trips through
/// [`Money::parse`] for the stock table.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_parse_whole_and_fractions() {
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10.99").unwrap().cents(), 1099);
        assert_eq!(Money::parse(" 0.05 ").unwrap().cents(), 5);
        assert_eq!(Money::parse("-5.50").unwrap().cents(), -550);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("10.").is_err());
        assert!(Money::parse(".99").is_err());
        assert!(Money::parse("10.995").is_err());
        assert!(Money::parse("1,099").is_err());
    }

    #[test]
    fn test_parse_display_round_trip() {
        for cents in [0, 5, 50, 1099, 123456] {
            let money = Money::from_cents(cents);
            assert_eq!(Money::parse(&money.to_string()).unwrap(), money);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!(a.line_total(3).cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [1000, 250, 99].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 1349);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }
}
