use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::models::{FlatRecord, TransactionType};
use crate::output::errors::SinkError;

pub const CSV_FILE_NAME: &str = "creditkarma_transactions.csv";
pub const JSON_FILE_NAME: &str = "creditkarma_transactions.json";

pub const CSV_HEADER: [&str; 9] = [
    "Date",
    "Description",
    "Original Description",
    "Amount",
    "Transaction Type",
    "Category",
    "Account Name",
    "Labels",
    "Notes"
];

/// Column layout of one CSV row, in `CSV_HEADER` order.
#[derive(Serialize)]
struct CsvRow<'a> {
    date: &'a str,
    merchant: &'a str,
    description: &'a str,
    amount: Decimal,
    transaction_type: TransactionType,
    category: &'a str,
    account: &'a str,
    labels: &'a str,
    notes: &'a str
}

impl<'a> From<&'a FlatRecord> for CsvRow<'a> {
    fn from(record: &'a FlatRecord) -> Self {
        Self {
            date: &record.date,
            merchant: record.merchant.as_deref().unwrap_or_default(),
            description: &record.description,
            amount: record.amount,
            transaction_type: record.transaction_type,
            category: record.category.as_deref().unwrap_or_default(),
            account: record.account.as_deref().unwrap_or_default(),
            labels: "",
            notes: ""
        }
    }
}

/// Append-only pair of outputs: raw transactions as JSON lines and flattened rows as CSV.
///
/// Each `append` writes the JSON line before the CSV row, so line N of one file always
/// describes the same transaction as row N of the other.
pub struct OutputSink<C: Write, J: Write> {
    csv: csv::Writer<C>,
    json: J
}

impl OutputSink<File, BufWriter<File>> {
    /// Opens (or creates) both files inside `directory` in append mode.
    ///
    /// The CSV header is only written when the CSV file is empty at this point.
    pub fn open(directory: &Path) -> Result<Self, SinkError> {
        let csv_path = directory.join(CSV_FILE_NAME);
        let json_path = directory.join(JSON_FILE_NAME);

        let csv_file = OpenOptions::new().create(true).append(true).open(&csv_path)?;
        let json_file = OpenOptions::new().create(true).append(true).open(&json_path)?;
        let write_header = csv_file.metadata()?.len() == 0;

        debug!("Opened {} (new header: {write_header}) and {}", csv_path.display(), json_path.display());

        Self::from_writers(csv_file, BufWriter::new(json_file), write_header)
    }
}

impl<C: Write, J: Write> OutputSink<C, J> {
    pub fn from_writers(csv: C, json: J, write_header: bool) -> Result<Self, SinkError> {
        let mut csv = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Always)
            .from_writer(csv);

        if write_header {
            csv.write_record(CSV_HEADER)?;
        }

        Ok(Self { csv, json })
    }

    /// Writes one transaction to both outputs, raw JSON first.
    pub fn append(&mut self, raw: &Value, record: &FlatRecord) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.json, raw)?;
        self.json.write_all(b"\n")?;
        self.csv.serialize(CsvRow::from(record))?;

        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), SinkError> {
        self.json.flush()?;
        self.csv.flush()?;

        Ok(())
    }

    /// Flushes and hands back the underlying writers.
    #[cfg(test)]
    pub fn into_writers(mut self) -> Result<(C, J), SinkError> {
        self.json.flush()?;
        let csv = self.csv.into_inner().map_err(|error| SinkError::Io(error.into_error()))?;

        Ok((csv, self.json))
    }
}
