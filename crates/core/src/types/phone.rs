//! Indian mobile number type.
//!
//! Checkout requires a mobile number of exactly ten digits. Form input
//! is sanitized as the user types (non-digits stripped, then truncated
//! to ten characters); validation on submit rejects anything that is
//! not exactly ten numeric digits.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`MobileNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MobileNumberError {
    /// The input string is empty.
    #[error("mobile number cannot be empty")]
    Empty,
    /// The input contains a character that is not a digit.
    #[error("mobile number must contain only digits")]
    NonDigit,
    /// The input is not exactly ten digits long.
    #[error("mobile number must be exactly {expected} digits (got {got})")]
    WrongLength {
        /// Required number of digits.
        expected: usize,
        /// Number of digits in the input.
        got: usize,
    },
}

/// A ten-digit mobile number.
///
/// ## Examples
///
/// ```
/// use masala_table_core::MobileNumber;
///
/// assert!(MobileNumber::parse("9876543210").is_ok());
/// assert!(MobileNumber::parse("98765").is_err());
/// assert!(MobileNumber::parse("98765abcde").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Required number of digits.
    pub const DIGITS: usize = 10;

    /// Parse a `MobileNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains a non-digit
    /// character, or is not exactly ten digits long.
    pub fn parse(s: &str) -> Result<Self, MobileNumberError> {
        if s.is_empty() {
            return Err(MobileNumberError::Empty);
        }
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(MobileNumberError::NonDigit);
        }
        if s.len() != Self::DIGITS {
            return Err(MobileNumberError::WrongLength {
                expected: Self::DIGITS,
                got: s.len(),
            });
        }
        Ok(Self(s.to_owned()))
    }

    /// Strip non-digit characters and truncate to ten digits.
    ///
    /// This is the as-you-type sanitation applied to the mobile input
    /// field; the result is not guaranteed to be a complete number.
    #[must_use]
    pub fn sanitize_input(s: &str) -> String {
        s.chars()
            .filter(char::is_ascii_digit)
            .take(Self::DIGITS)
            .collect()
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `MobileNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MobileNumber {
    type Err = MobileNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
