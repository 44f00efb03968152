//! Whole-rupee money type.
//!
//! Menu prices are quoted in whole rupees with no paise component, so
//! amounts are plain unsigned integers rather than decimals. Display
//! formatting prefixes the `₹` sign; parsing accepts display-formatted
//! strings such as `"₹249"` by stripping everything that is not an
//! ASCII digit.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Rupees`] amount.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The input contains no digits at all.
    #[error("price contains no digits: {0:?}")]
    NoDigits(String),
    /// The digits do not fit in the amount type.
    #[error("price out of range: {0:?}")]
    OutOfRange(String),
}

/// An amount of whole rupees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupees(u32);

impl Rupees {
    /// Zero rupees.
    pub const ZERO: Self = Self(0);

    /// Create an amount of whole rupees.
    #[must_use]
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    /// Returns the amount as a plain integer.
    #[must_use]
    pub const fn amount(self) -> u32 {
        self.0
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtraction clamped at zero.
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Parse a display-formatted price string such as `"₹249"`.
    ///
    /// All non-digit characters are stripped before parsing, so currency
    /// signs, thousands separators and surrounding whitespace are all
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::NoDigits`] if the input contains no digits
    /// and [`MoneyError::OutOfRange`] if the digits overflow.
    pub fn parse_display(s: &str) -> Result<Self, MoneyError> {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(MoneyError::NoDigits(s.to_owned()));
        }
        digits
            .parse::<u32>()
            .map(Self)
            .map_err(|_| MoneyError::OutOfRange(s.to_owned()))
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

impl Add for Rupees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Rupees {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Rupees {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
