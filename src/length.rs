//! # Length
//!
//! Validated string length. Negative values are rejected rather than clamped.
use std::fmt::Display;
use std::str::FromStr;

use crate::error::RandStrError;

/// Non-negative length of a generated string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Length(usize);

impl Length {
    /// Get the length as a `usize`
    pub fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for Length {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<Length> for usize {
    fn from(value: Length) -> Self {
        value.0
    }
}

impl TryFrom<i64> for Length {
    type Error = RandStrError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(RandStrError::InvalidLength(format!(
                "length must not be negative ({})",
                value
            )));
        }
        usize::try_from(value).map(Self).map_err(|_| {
            RandStrError::InvalidLength(format!("length is too large ({})", value))
        })
    }
}

impl FromStr for Length {
    type Err = RandStrError;

    /// Parse a length
    ///
    /// ```rust
    /// use randstr::Length;
    ///
    /// let length: Length = "32".parse().unwrap();
    /// assert_eq!(length.get(), 32);
    ///
    /// assert!("-1".parse::<Length>().is_err());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value = input.trim().parse::<i64>().map_err(|error| {
            RandStrError::InvalidLength(format!("'{}' is not a number ({})", input, error))
        })?;
        Self::try_from(value)
    }
}

impl Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
