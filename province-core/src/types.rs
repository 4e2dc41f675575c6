use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::error::CoercionError;

// ============================================================================
// Type aliases
// ============================================================================

pub type Quantity = f64;
pub type Cost = f64;
pub type Price = f64;

// ============================================================================
// Numeric - number-or-string values arriving from records and user input
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Arithmetic value, no truncation.
    pub fn to_number(&self) -> Result<f64, CoercionError> {
        match self {
            Numeric::Number(n) if n.is_nan() => Err(CoercionError::NotNumeric(n.to_string())),
            Numeric::Number(n) => Ok(*n),
            Numeric::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if !n.is_nan() => Ok(n),
                _ => Err(CoercionError::NotNumeric(s.clone())),
            },
        }
    }

    /// Integer value as stored by the demand and price mutators.
    ///
    /// Numbers truncate toward zero. Strings take the leading integer:
    /// whitespace is skipped, an optional sign is read, then the longest run
    /// of decimal digits. Anything after the digits is ignored.
    pub fn to_integer(&self) -> Result<f64, CoercionError> {
        match self {
            Numeric::Number(n) if n.is_finite() => Ok(n.trunc()),
            Numeric::Number(n) => Err(CoercionError::NotNumeric(n.to_string())),
            Numeric::Text(s) => leading_integer(s).ok_or_else(|| CoercionError::NotNumeric(s.clone())),
        }
    }
}

fn leading_integer(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    // ASCII digits only, so the byte count is a valid char boundary
    let value: f64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Number(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Number(value.into())
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Number(value as f64)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Text(value.to_string())
    }
}

impl From<String> for Numeric {
    fn from(value: String) -> Self {
        Numeric::Text(value)
    }
}
