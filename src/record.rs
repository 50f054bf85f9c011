//! Transaction record model and the enums it carries.

use crate::amount::Amount;
use serde::{Serialize, Serializer};
use std::fmt;

/// Column order of the output table, shared by the JSON object shape and
/// the CSV export header.
pub const OUTPUT_COLUMNS: [&str; 10] = [
    "timestamp",
    "amount",
    "currency",
    "recipient",
    "payment_method",
    "account_number",
    "transaction_id",
    "status",
    "product",
    "wallet",
];

/// Currency derived from the symbol found next to the amount.
///
/// Unmapped symbols are passed through literally rather than dropped, so a
/// record never loses the currency information the document carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Currency {
    Inr,
    Eur,
    Usd,
    Gbp,
    /// A symbol outside the known set, kept verbatim.
    Other(String),
}

impl Currency {
    /// Maps a currency symbol to its ISO code, falling back to the raw symbol.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "₹" => Currency::Inr,
            "€" => Currency::Eur,
            "$" => Currency::Usd,
            "£" => Currency::Gbp,
            other => Currency::Other(other.to_string()),
        }
    }

    /// The ISO code, or the raw symbol for unmapped currencies.
    pub fn code(&self) -> &str {
        match self {
            Currency::Inr => "INR",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Other(symbol) => symbol,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

/// Transaction status.
///
/// The known vocabulary covers every status the provider is seen to emit;
/// anything else captured from a labeled `Status:`/`State:` line is kept
/// as `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Completed,
    Pending,
    Failed,
    Cancelled,
    Processing,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Completed => "Completed",
            Status::Pending => "Pending",
            Status::Failed => "Failed",
            Status::Cancelled => "Cancelled",
            Status::Processing => "Processing",
            Status::Other(word) => word,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// One extracted transaction.
///
/// `amount` is the only field guaranteed present; a fragment with no
/// parsable amount never becomes a record. Every other field serializes
/// as `null` when absent so downstream consumers see a stable object
/// shape.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRecord {
    /// Normalized `YYYY-MM-DD HH:MM:SS` timestamp, when one was found.
    pub timestamp: Option<String>,

    /// Magnitude of money moved. Always positive.
    pub amount: Amount,

    /// Currency of the amount, from the adjacent symbol.
    pub currency: Option<Currency>,

    /// Counterparty name, cleaned of markup.
    pub recipient: Option<String>,

    /// Payment instrument ("Bank Account", "Credit Card", ...).
    pub payment_method: Option<String>,

    /// Masked account/card identifier, e.g. `XXXXXXX1234`.
    pub account_number: Option<String>,

    /// Provider transaction identifier from the Details label.
    pub transaction_id: Option<String>,

    /// Transaction status.
    pub status: Option<Status>,

    /// Product label from the Products heading, or the service name.
    pub product: Option<String>,

    /// Mirrors `product`; kept as a distinct column in the output contract.
    pub wallet: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_currency_symbol_mapping() {
        assert_eq!(Currency::from_symbol("₹"), Currency::Inr);
        assert_eq!(Currency::from_symbol("€"), Currency::Eur);
        assert_eq!(Currency::from_symbol("$"), Currency::Usd);
        assert_eq!(Currency::from_symbol("£"), Currency::Gbp);
        assert_eq!(
            Currency::from_symbol("¥"),
            Currency::Other("¥".to_string())
        );
    }

    #[test]
    fn test_currency_serializes_as_code_or_raw_symbol() {
        assert_eq!(serde_json::to_string(&Currency::Inr).unwrap(), "\"INR\"");
        assert_eq!(
            serde_json::to_string(&Currency::Other("¥".to_string())).unwrap(),
            "\"¥\""
        );
    }

    #[test]
    fn test_record_serializes_missing_fields_as_null() {
        let record = TransactionRecord {
            timestamp: None,
            amount: Amount::from_str("150.00").unwrap(),
            currency: Some(Currency::Inr),
            recipient: None,
            payment_method: None,
            account_number: None,
            transaction_id: None,
            status: Some(Status::Completed),
            product: None,
            wallet: None,
        };

        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert!(json["timestamp"].is_null());
        assert_eq!(json["amount"], 150.0);
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["status"], "Completed");
        assert!(json["wallet"].is_null());
    }
}
