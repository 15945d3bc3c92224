//! Diagnostic codes with category prefixes for structured identification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of a diagnostic code, determining its prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Apple platform API usage, prefixed with `XIA`.
    Apple,
}

impl Category {
    /// Returns the prefix for this category.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Apple => "XIA",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Category> {
        match prefix {
            "XIA" => Some(Category::Apple),
            _ => None,
        }
    }
}

/// A structured diagnostic code combining a category prefix and a number.
///
/// Displayed as the prefix followed by a zero-padded 4-digit number,
/// e.g. `XIA1002`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.category.prefix(), self.number)
    }
}

/// Error returned when a string is not a diagnostic code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid diagnostic code '{0}'")]
pub struct ParseCodeError(pub String);

impl FromStr for DiagnosticCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCodeError(s.to_string());
        let split = s.find(|c: char| c.is_ascii_digit()).ok_or_else(err)?;
        let (prefix, digits) = s.split_at(split);
        let category = Category::from_prefix(&prefix.to_ascii_uppercase()).ok_or_else(err)?;
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let number = digits.parse().map_err(|_| err())?;
        Ok(DiagnosticCode::new(category, number))
    }
}
