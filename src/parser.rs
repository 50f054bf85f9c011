//! Record assembly: segmentation, per-fragment extraction, and the
//! validity gate, composed into the parse entry points.
//!
//! Two rules decide whether a fragment becomes a record: it must contain
//! an action verb (checked before any extractor runs), and it must yield
//! a parsable amount. Everything else is optional. Rejections are logged
//! at debug level and never abort a parse.

use crate::error::{ParserError, Result};
use crate::extract;
use crate::record::TransactionRecord;
use crate::segment::segment;
use crate::timestamp;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

/// Minimal signal that a fragment describes a transaction at all.
static ACTION_VERB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Paid|Sent|Received|Credited").expect("invalid action verb regex"));

/// Parses one document into transaction records, in discovery order.
///
/// An empty vector means the document held no recognizable transactions;
/// it is a valid outcome, not an error.
pub fn parse_document(doc: &str) -> Vec<TransactionRecord> {
    segment(doc).into_iter().filter_map(assemble).collect()
}

/// Reads and parses one file. Read and decode failures are the only
/// errors this crate produces on the parse path.
pub fn parse_file(path: &Path) -> Result<Vec<TransactionRecord>> {
    let bytes = fs::read(path).map_err(|source| ParserError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = String::from_utf8(bytes).map_err(|_| ParserError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    Ok(parse_document(&doc))
}

/// Parses several files and concatenates their records in file order.
pub fn parse_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<TransactionRecord>> {
    let mut records = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let parsed = parse_file(path)?;
        info!("{}: extracted {} transactions", path.display(), parsed.len());
        records.extend(parsed);
    }

    Ok(records)
}

/// Sorts records newest-first by normalized timestamp; records without a
/// timestamp sort last. Stable, so file order is preserved within ties.
pub fn sort_by_timestamp_desc(records: &mut [TransactionRecord]) {
    records.sort_by(|a, b| match (&a.timestamp, &b.timestamp) {
        (Some(left), Some(right)) => right.cmp(left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Runs the extractors over one fragment and applies the validity gate.
fn assemble(fragment: &str) -> Option<TransactionRecord> {
    if !ACTION_VERB.is_match(fragment) {
        debug!("fragment skipped: no action verb");
        return None;
    }

    let Some((amount, currency)) = extract::extract_amount(fragment) else {
        debug!("fragment skipped: no parsable amount");
        return None;
    };

    let product = extract::extract_product(fragment);

    Some(TransactionRecord {
        timestamp: timestamp::extract_timestamp(fragment),
        amount,
        currency: Some(currency),
        recipient: extract::extract_recipient(fragment),
        payment_method: extract::extract_payment_method(fragment),
        account_number: extract::extract_account_number(fragment),
        transaction_id: extract::extract_transaction_id(fragment),
        status: extract::extract_status(fragment),
        wallet: product.clone(),
        product,
    })
}
