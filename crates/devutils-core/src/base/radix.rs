//! Radix type and digit alphabet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DevUtilsError, Result};

/// Digit alphabet shared by every supported base. A base `b` uses the first
/// `b` characters.
pub const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A positional number base in `2..=36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Radix(u32);

impl Radix {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEX: Radix = Radix(16);

    /// Default radix of the custom field.
    pub const DEFAULT_CUSTOM: Radix = Radix(32);

    /// Create a radix, rejecting values outside `2..=36`.
    pub fn new(value: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DevUtilsError::InvalidArgument(format!(
                "base {} is out of range ({}-{})",
                value,
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Value of `c` in this radix, case-insensitive.
    pub fn digit_value(self, c: char) -> Option<u32> {
        let value = c.to_digit(Self::MAX)?;
        (value < self.0).then_some(value)
    }

    /// Lowercase character for a digit value.
    pub(crate) fn digit_char(value: u32) -> char {
        DIGITS[value as usize] as char
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::DEFAULT_CUSTOM
    }
}

impl TryFrom<u32> for Radix {
    type Error = DevUtilsError;

    fn try_from(value: u32) -> Result<Self> {
        Radix::new(value)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

impl FromStr for Radix {
    type Err = DevUtilsError;

    fn from_str(s: &str) -> Result<Self> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| DevUtilsError::InvalidArgument(format!("base \"{}\" is not a number", s)))?;
        Radix::new(value)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
