//! # Activity Parser
//!
//! Extracts normalized transaction records from payment activity HTML
//! exports ("download your data" documents).
//!
//! ## Design Principles
//!
//! - **Tiered segmentation**: precise container split first, looser
//!   heuristics only when the structure is missing
//! - **Independent field extractors**: pure functions, one per field;
//!   a failed match leaves the field absent instead of failing the parse
//! - **Single validity gate**: a fragment becomes a record if and only
//!   if it carries an action verb and a parsable amount
//! - **Order preservation**: output follows fragment discovery order
//!
//! ## Example
//!
//! ```
//! use activity_parser::parse_document;
//!
//! let doc = r#"<div class="outer-cell x">Paid ₹150.00 to Starbucks
//! using Credit Card XXXX1234<br/>Status: Completed</div>"#;
//!
//! let records = parse_document(doc);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].recipient.as_deref(), Some("Starbucks"));
//! ```

pub mod amount;
pub mod error;
pub mod export;
pub mod extract;
pub mod parser;
pub mod record;
pub mod segment;
pub mod timestamp;

pub use amount::Amount;
pub use error::{ParserError, Result};
pub use parser::{parse_document, parse_file, parse_files, sort_by_timestamp_desc};
pub use record::{Currency, Status, TransactionRecord, OUTPUT_COLUMNS};
