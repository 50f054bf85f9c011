//! CSV export of the transaction table.

use crate::error::Result;
use crate::record::{TransactionRecord, OUTPUT_COLUMNS};
use std::io::Write;

/// Writes records as a CSV table with the standard 10-column header.
///
/// Absent fields become empty cells; amounts are formatted with exactly
/// 2 decimal places.
pub fn write_csv<W: Write>(records: &[TransactionRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(OUTPUT_COLUMNS)?;

    for record in records {
        csv_writer.write_record([
            record.timestamp.clone().unwrap_or_default(),
            record.amount.to_string(),
            record
                .currency
                .as_ref()
                .map(|c| c.code().to_string())
                .unwrap_or_default(),
            record.recipient.clone().unwrap_or_default(),
            record.payment_method.clone().unwrap_or_default(),
            record.account_number.clone().unwrap_or_default(),
            record.transaction_id.clone().unwrap_or_default(),
            record
                .status
                .as_ref()
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            record.product.clone().unwrap_or_default(),
            record.wallet.clone().unwrap_or_default(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_document;

    #[test]
    fn test_csv_header_and_rows() {
        let doc = r#"<div class="outer-cell x">Paid ₹150.00 to Starbucks using Credit Card XXXX1234<br/>Status: Completed</div>"#;
        let records = parse_document(doc);
        assert_eq!(records.len(), 1);

        let mut output = Vec::new();
        write_csv(&records, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "timestamp,amount,currency,recipient,payment_method,account_number,transaction_id,status,product,wallet"
        );
        assert_eq!(
            lines.next().unwrap(),
            ",150.00,INR,Starbucks,Credit Card,XXXX1234,,Completed,,"
        );
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let mut output = Vec::new();
        write_csv(&[], &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
