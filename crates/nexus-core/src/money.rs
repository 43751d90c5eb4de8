//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Units at Scale 4                                 │
//! │    1 unit = 1/10,000 of the currency                                    │
//! │    $10.99  = 109,900 units                                              │
//! │    $0.0001 = 1 unit (smallest representable amount)                     │
//! │                                                                         │
//! │  Four fractional digits match the monetary scale used across the       │
//! │  Nexus order exchange, so no amount is ever rounded on the way in.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use nexus_core::money::Money;
//!
//! // Create from raw units (1/10,000) or parse a decimal string
//! let price = Money::from_units(99_900); // 9.99
//! assert_eq!(Money::parse("9.99").unwrap(), price);
//!
//! // Arithmetic operations
//! let doubled = price * 2_u32;
//! let total = price + Money::from_units(5_000);
//! assert_eq!(doubled.units(), 199_800);
//! assert_eq!(total.units(), 104_900);
//!
//! // NEVER from floats - no such constructor exists by design
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::{CoreError, CoreResult};

/// Number of integer units per whole currency unit (scale 4).
pub const UNITS_PER_MAJOR: i64 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an integer count of 1/10,000 currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Scale 4**: Matches the stored scale of all Nexus monetary fields
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// The currency itself is carried by the owning `Order` (ISO 4217 code);
/// `Money` is deliberately currency-agnostic arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from raw units (1/10,000 of the currency).
    ///
    /// ## Example
    /// ```rust
    /// use nexus_core::money::Money;
    ///
    /// let price = Money::from_units(109_900); // 10.99
    /// assert_eq!(price.units(), 109_900);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Creates a Money value from major units and hundredths (e.g. dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use nexus_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // 10.99
    /// assert_eq!(price.units(), 109_900);
    ///
    /// let refund = Money::from_major_minor(-5, 50); // -5.50
    /// assert_eq!(refund.units(), -55_000);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * UNITS_PER_MAJOR - minor * 100)
        } else {
            Money(major * UNITS_PER_MAJOR + minor * 100)
        }
    }

    /// Parses a plain decimal string (`"9.99"`, `"25"`, `"-3.5"`, `".25"`).
    ///
    /// ## Rules
    /// - At most 4 fractional digits (the stored scale); more is an error,
    ///   never a silent rounding
    /// - No exponents, grouping separators, or currency symbols
    pub fn parse(value: &str) -> CoreResult<Money> {
        let invalid = |reason: &'static str| CoreError::InvalidAmount {
            value: value.to_string(),
            reason,
        };

        let trimmed = value.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid("no digits"));
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid("not a plain decimal number"));
        }
        if frac_part.len() > 4 {
            return Err(invalid("more than 4 fractional digits"));
        }

        let major: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| invalid("integer part overflow"))?
        };

        // Right-pad the fraction to scale 4: "5" -> 5000 units
        let mut frac_units: i64 = 0;
        for b in frac_part.bytes() {
            frac_units = frac_units * 10 + i64::from(b - b'0');
        }
        frac_units *= 10_i64.pow(4 - frac_part.len() as u32);

        let units = major
            .checked_mul(UNITS_PER_MAJOR)
            .and_then(|u| u.checked_add(frac_units))
            .ok_or_else(|| invalid("amount overflow"))?;

        Ok(Money(if negative { -units } else { units }))
    }

    /// Returns the value in raw units (1/10,000 of the currency).
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (whole currency units).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / UNITS_PER_MAJOR
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

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Applies a rate given in basis points, rounding half-up.
    ///
    /// ## Implementation
    /// Integer math in i128 to prevent overflow on large amounts:
    /// `(units * bps + 5000) / 10000`. The +5000 provides the rounding
    /// (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use nexus_core::money::{Money, TaxRate};
    ///
    /// let subtotal = Money::parse("10.00").unwrap();
    /// let rate = TaxRate::from_bps(825); // 8.25%
    ///
    /// // 10.00 × 8.25% = 0.825 exactly, representable at scale 4
    /// assert_eq!(subtotal.apply_rate(rate), Money::parse("0.825").unwrap());
    /// ```
    pub fn apply_rate(&self, rate: TaxRate) -> Money {
        let units = (self.0 as i128 * rate.bps() as i128 + 5_000) / 10_000;
        Money::from_units(units as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use nexus_core::money::Money;
    ///
    /// let unit_price = Money::parse("2.99").unwrap();
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total, Money::parse("8.97").unwrap());
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Renders the amount as a plain decimal string.
    ///
    /// Two fractional digits minimum; sub-cent digits appear only when
    /// non-zero, so `9.99` stays `9.99` and `0.0825` is not truncated.
    /// This is the rendering used in EDIFACT MOA segments.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let major = abs / UNITS_PER_MAJOR as u64;
        let frac = abs % UNITS_PER_MAJOR as u64;

        if frac % 100 == 0 {
            format!("{}{}.{:02}", sign, major, frac / 100)
        } else if frac % 10 == 0 {
            format!("{}{}.{:03}", sign, major, frac / 10)
        } else {
            format!("{}{}.{:04}", sign, major, frac)
        }
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 825 bps = 8.25%, 1900 bps = 19% (e.g. German VAT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the plain decimal amount.
///
/// ## Note
/// No currency symbol: the currency lives on the owning order, and the
/// EDIFACT/registry surfaces want bare decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
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

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Multiplication by u32 quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(109_900);
        assert_eq!(money.units(), 109_900);
        assert_eq!(money.major(), 10);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.units(), 109_900);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.units(), -55_000);
    }

    #[test]
    fn test_parse_scales() {
        assert_eq!(Money::parse("25").unwrap().units(), 250_000);
        assert_eq!(Money::parse("9.99").unwrap().units(), 99_900);
        assert_eq!(Money::parse("-3.5").unwrap().units(), -35_000);
        assert_eq!(Money::parse("0.0001").unwrap().units(), 1);
        assert_eq!(Money::parse(".25").unwrap().units(), 2_500);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("-").is_err());
        assert!(Money::parse("1.23456").is_err()); // 5 fractional digits
        assert!(Money::parse("12a.00").is_err());
        assert!(Money::parse("1,000").is_err());
        assert!(Money::parse("1e3").is_err());
    }

    #[test]
    fn test_parse_print_round_trip() {
        for s in ["0.00", "9.99", "10.50", "25.00", "0.825", "0.0001", "-5.50"] {
            let money = Money::parse(s).unwrap();
            assert_eq!(money.to_decimal_string(), s);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(99_900)), "9.99");
        assert_eq!(format!("{}", Money::from_units(105_000)), "10.50");
        assert_eq!(format!("{}", Money::from_units(-55_000)), "-5.50");
        assert_eq!(format!("{}", Money::zero()), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::parse("10.00").unwrap();
        let b = Money::parse("5.00").unwrap();

        assert_eq!((a + b).to_decimal_string(), "15.00");
        assert_eq!((a - b).to_decimal_string(), "5.00");
        let result: Money = a * 3_i64;
        assert_eq!(result.to_decimal_string(), "30.00");
    }

    #[test]
    fn test_apply_rate_exact() {
        // 10.00 at 10% = 1.00
        let amount = Money::parse("10.00").unwrap();
        let tax = amount.apply_rate(TaxRate::from_bps(1000));
        assert_eq!(tax, Money::parse("1.00").unwrap());
    }

    #[test]
    fn test_apply_rate_scale_four() {
        // 10.00 at 8.25% = 0.825 exactly - no rounding needed at scale 4
        let amount = Money::parse("10.00").unwrap();
        let tax = amount.apply_rate(TaxRate::from_bps(825));
        assert_eq!(tax.to_decimal_string(), "0.825");
    }

    #[test]
    fn test_apply_rate_rounds_half_up() {
        // 0.0001 at 8.25% = 0.00000825 units -> rounds to 0
        let tiny = Money::from_units(1);
        assert_eq!(tiny.apply_rate(TaxRate::from_bps(825)), Money::zero());

        // 6.0606 at 8.25% = 0.50000 after rounding:
        // (60606 * 825 + 5000) / 10000 = 5000 units
        let amount = Money::parse("6.0606").unwrap();
        assert_eq!(amount.apply_rate(TaxRate::from_bps(825)).units(), 5_000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::parse("2.99").unwrap();
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total, Money::parse("8.97").unwrap());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_units(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().units(), 100);
    }

    #[test]
    fn test_tax_rate() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert!((rate.percentage() - 8.25).abs() < 0.001);
        assert!(TaxRate::default().is_zero());
    }
}
