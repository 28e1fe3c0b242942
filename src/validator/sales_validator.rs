use std::str;

use csv::{ReaderBuilder, StringRecord};
use tracing::{error, info};

use crate::models::{ProcessError, RequiredColumn, RowError, SalesRecord, ValidationOutcome, ValidationResponse};
use crate::types::{Amount, LineNumber};

/// Validates an uploaded sales CSV body and renders the pass/fail response.
pub struct SalesValidator;

impl SalesValidator {
    pub fn new() -> Self {
        Self
    }

    /// Runs the full validation pipeline over a raw request body.
    ///
    /// Every path resolves to a [`ValidationResponse`]; nothing is thrown at the
    /// caller. An empty body is the only outcome carried with status 400 -
    /// validation failures, missing columns, and processing errors all report
    /// through the body text with status 200.
    pub fn validate(&self, body: &[u8]) -> ValidationResponse {
        if body.is_empty() {
            return ValidationResponse::bad_request("Please pass the CSV data in the request body");
        }

        match self.evaluate(body) {
            Ok(ValidationOutcome::Passed) => {
                info!("Validation Passed");
                ValidationResponse::ok("Validation Passed")
            }
            Ok(ValidationOutcome::MissingColumns(columns)) => {
                let names: Vec<&str> = columns.iter().map(RequiredColumn::header).collect();
                let message = format!("Invalid Data: Missing columns - {}", names.join(", "));
                error!("{message}");
                ValidationResponse::ok(message)
            }
            Ok(ValidationOutcome::Failed(errors)) => {
                let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
                let message = format!("Invalid Data: \n{}", details.join("\n"));
                error!("{message}");
                ValidationResponse::ok(message)
            }
            Err(process_error) => {
                error!("Error processing uploaded data: {process_error}");
                ValidationResponse::ok(format!("Invalid Data: Error processing file - {process_error}"))
            }
        }
    }

    fn evaluate(&self, body: &[u8]) -> Result<ValidationOutcome, ProcessError> {
        let text = str::from_utf8(body)?;

        //NOTE: Cells are not trimmed at the reader so failure reports can quote the
        //      original text; the trim-and-emptiness rule is applied per check instead.
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();

        if headers.iter().all(|header| header.trim().is_empty()) {
            return Err(ProcessError::NoColumns);
        }

        let missing = self.missing_columns(&headers);

        if !missing.is_empty() {
            return Ok(ValidationOutcome::MissingColumns(missing));
        }

        let mut errors = Vec::new();

        for (index, result) in reader.deserialize::<SalesRecord>().enumerate() {
            let record = result?;
            // Line 1 is the header, so the first data row reports as line 2.
            self.validate_record(&record, index + 2, &mut errors);
        }

        if errors.is_empty() {
            Ok(ValidationOutcome::Passed)
        } else {
            Ok(ValidationOutcome::Failed(errors))
        }
    }

    fn missing_columns(&self, headers: &StringRecord) -> Vec<RequiredColumn> {
        RequiredColumn::ALL.iter()
            .filter(|column| !headers.iter().any(|header| header == column.header()))
            .copied()
            .collect()
    }

    fn validate_record(&self, record: &SalesRecord, line: LineNumber, errors: &mut Vec<RowError>) {
        for column in RequiredColumn::ALL {
            if record.is_missing(column) {
                errors.push(RowError::MissingValue { line, column });
            }
        }

        //NOTE: A blank Amount was already reported as missing above; the numeric
        //      check only applies when the cell actually holds text.
        let Some(raw) = record.field(RequiredColumn::Amount) else {
            return;
        };

        if raw.trim().is_empty() {
            return;
        }

        match raw.trim().parse::<Amount>() {
            Ok(amount) if amount.is_negative() => {
                errors.push(RowError::NegativeAmount { line, amount });
            }
            Ok(_) => {}
            Err(_) => {
                errors.push(RowError::InvalidAmountFormat { line, value: raw.to_string() });
            }
        }
    }
}
