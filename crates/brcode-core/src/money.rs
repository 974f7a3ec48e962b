//! # Money Module
//!
//! Provides the `Amount` type for the optional transaction amount (tag 54).
//!
//! ## Why Integer Centavos?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The payload carries the amount as text with exactly two decimals:     │
//! │    R$ 10,50  ──►  "10.50"                                              │
//! │                                                                         │
//! │  Formatting a float to two places rounds in binary, not decimal:       │
//! │    1.005 ──► "1.00"  ❌                                                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                        │
//! │    1050 centavos ──► 10 reais + 50 centavos ──► "10.50"                │
//! │    Formatting is exact, and locale never enters the picture            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use brcode_core::money::Amount;
//!
//! let price: Amount = "10.5".parse().unwrap();
//! assert_eq!(price.centavos(), 1050);
//! assert_eq!(price.to_payload_string(), "10.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::PayloadError;

// =============================================================================
// Amount Type
// =============================================================================

/// A BRL amount in centavos (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values are representable so validation can
///   reject them with a proper error instead of failing to parse
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serde**: serialized as the raw centavo count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Amount(i64);

impl Amount {
    /// Creates an amount from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use brcode_core::money::Amount;
    ///
    /// let price = Amount::from_centavos(1099); // R$ 10,99
    /// assert_eq!(price.centavos(), 1099);
    /// ```
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Amount(centavos)
    }

    /// Converts a decimal number of reais, rounding to the nearest centavo.
    ///
    /// ## Errors
    /// `InvalidAmount` for NaN, infinities, negative values, and values
    /// too large for an `i64` centavo count.
    ///
    /// ## Example
    /// ```rust
    /// use brcode_core::money::Amount;
    ///
    /// assert_eq!(Amount::try_from_decimal(10.5).unwrap().centavos(), 1050);
    /// assert!(Amount::try_from_decimal(f64::NAN).is_err());
    /// assert!(Amount::try_from_decimal(-1.0).is_err());
    /// ```
    pub fn try_from_decimal(reais: f64) -> Result<Self, PayloadError> {
        if !reais.is_finite() {
            return Err(PayloadError::InvalidAmount {
                reason: "must be a finite number".to_string(),
            });
        }
        if reais < 0.0 {
            return Err(PayloadError::InvalidAmount {
                reason: "must not be negative".to_string(),
            });
        }

        let centavos = (reais * 100.0).round();
        if centavos > i64::MAX as f64 {
            return Err(PayloadError::InvalidAmount {
                reason: "is too large".to_string(),
            });
        }

        Ok(Amount(centavos as i64))
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the whole reais portion.
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavos portion (always 0-99).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Formats the amount the way tag 54 carries it.
    ///
    /// Always a period separator and exactly two fractional digits,
    /// independent of any locale.
    ///
    /// ## Example
    /// ```rust
    /// use brcode_core::money::Amount;
    ///
    /// assert_eq!(Amount::from_centavos(1050).to_payload_string(), "10.50");
    /// assert_eq!(Amount::from_centavos(7).to_payload_string(), "0.07");
    /// ```
    pub fn to_payload_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.reais().abs(), self.centavos_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Human-readable form for logs and debugging, not for the payload.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {}", self.to_payload_string())
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::from_centavos(0)
    }
}

/// Parses decimal text such as `"10"`, `"10.5"` or `"10.50"`.
///
/// ## Rules
/// - Period is the only decimal separator
/// - At most two fractional digits (no silent rounding of typed input)
/// - No sign, no thousands separators
impl FromStr for Amount {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = |reason: &str| PayloadError::InvalidAmount {
            reason: reason.to_string(),
        };

        if s.is_empty() {
            return Err(invalid("is empty"));
        }
        if s.starts_with('-') {
            return Err(invalid("must not be negative"));
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid(&format!("'{}' is not a decimal number", s)));
        }
        if fraction.len() > 2 {
            return Err(invalid("has more than two decimal places"));
        }

        let reais: i64 = whole.parse().map_err(|_| invalid("is too large"))?;
        let centavos: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid("is malformed"))? * 10,
            _ => fraction.parse().map_err(|_| invalid("is malformed"))?,
        };

        reais
            .checked_mul(100)
            .and_then(|c| c.checked_add(centavos))
            .map(Amount)
            .ok_or_else(|| invalid("is too large"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
