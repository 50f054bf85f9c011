//! Monetary amount type with 2 decimal places of display precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so extracted
//! amounts compare and print consistently regardless of how the source
//! document formatted them ("150", "150.0", "1,50,000.50").

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A positive monetary magnitude normalized to 2 decimal places.
///
/// Activity exports never carry a sign on the numeral (direction is
/// expressed by the action verb), so the magnitude is stored as-is.
/// Serializes as a JSON number to match the export contract.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use activity_parser::Amount;
///
/// let amount = Amount::from_str("1,50,000.5").unwrap();
/// assert_eq!(amount.to_string(), "150000.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Creates a new `Amount` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Amount(normalized)
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    /// Parses a numeral token as it appears in the document: thousands
    /// separators are stripped (both "1,234.56" and the Indian-style
    /// "1,50,000" grouping) and a dangling trailing dot is tolerated.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let cleaned = s.trim().replace(',', "");
        let cleaned = cleaned.trim_end_matches('.');
        let decimal = Decimal::from_str(cleaned)?;
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self
            .0
            .to_f64()
            .ok_or_else(|| serde::ser::Error::custom("amount not representable as f64"))?;
        serializer.serialize_f64(value)
    }
}
