//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64) to avoid floating-point
//! precision issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored in minor units (hundredths of the
/// currency unit)
///
/// Using i64 minor units keeps sums exact and supports amounts far beyond
/// anything a personal ledger will see, both positive and negative.
///
/// Serializes as an integer count of minor units. Deserialization also
/// accepts decimal JSON numbers, read as major units and scaled, so
/// documents written by other tools (`"amount": 150000.0`) stay loadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole major units (e.g. whole rupiah)
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole major-unit portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor-unit portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "150000", "150000.50", "-150000.50", "Rp150000".
    /// Fraction digits beyond the second are truncated, never rounded.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        // Handle negative sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency prefix if present
        let s = s.strip_prefix("Rp").unwrap_or(s);

        let (major_str, frac_str) = match s.split_once('.') {
            Some((major, frac)) => (major, frac),
            None => (s, ""),
        };

        let major: i64 = major_str.parse().map_err(|_| invalid())?;

        // The fraction must be all digits; only the first two carry value
        if frac_str.contains(|c: char| !c.is_ascii_digit()) {
            return Err(invalid());
        }
        let mut digits = frac_str.chars();
        let tens = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;
        let ones = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;
        let frac = tens * 10 + ones;

        let minor = major
            .checked_mul(100)
            .and_then(|m| m.checked_add(frac))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -minor } else { minor }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct MoneyVisitor;

        impl serde::de::Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a monetary amount as a JSON number")
            }

            // Integers are minor units, the format this crate writes
            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Money, E> {
                Ok(Money(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Money, E> {
                i64::try_from(v)
                    .map(Money)
                    .map_err(|_| E::custom("amount out of range"))
            }

            // Decimals are major units, as other writers record them
            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Money, E> {
                let minor = (v * 100.0).round();
                if !minor.is_finite() || minor < i64::MIN as f64 || minor > i64::MAX as f64 {
                    return Err(E::custom("amount out of range"));
                }
                Ok(Money(minor as i64))
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

/// Group a non-negative number with thousands separators ("5000000" -> "5,000,000")
fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(
                f,
                "-Rp{}.{:02}",
                group_thousands(self.major().abs()),
                self.minor_part()
            )
        } else {
            write!(
                f,
                "Rp{}.{:02}",
                group_thousands(self.major()),
                self.minor_part()
            )
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
