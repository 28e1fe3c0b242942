use std::str::Utf8Error;

use thiserror::Error;

use crate::models::RequiredColumn;
use crate::types::{Amount, LineNumber};

/// A single row-level finding. The `Display` output is the exact line that
/// appears in the validation report.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("Row {line}: Missing value for {column}")]
    MissingValue {
        line: LineNumber,
        column: RequiredColumn
    },
    #[error("Row {line}: Invalid format for Amount ('{value}')")]
    InvalidAmountFormat {
        line: LineNumber,
        value: String
    },
    #[error("Row {line}: Negative amount ({amount}) is not allowed.")]
    NegativeAmount {
        line: LineNumber,
        amount: Amount
    }
}

/// Structural failures that abort the scan. Unlike `RowError` these are never
/// accumulated; they surface through the generic processing-error response.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{0}")]
    Utf8(#[from] Utf8Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("No columns to parse from input")]
    NoColumns
}
