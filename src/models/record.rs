use serde::Deserialize;

use crate::models::RequiredColumn;

/// Represents a single data row from the uploaded CSV body.
///
/// Cells are kept as raw text so the validator can apply its own trim-and-emptiness
/// rule and quote the original value in failure reports. Every field is optional
/// because an empty or absent cell deserializes to `None`; columns outside the
/// required set are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesRecord {
    /// The transaction identifier cell.
    #[serde(rename = "TransactionID")]
    pub transaction_id: Option<String>,
    /// The product name cell.
    #[serde(rename = "ProductName")]
    pub product_name: Option<String>,
    /// The amount cell, untrimmed and unparsed.
    #[serde(rename = "Amount")]
    pub amount: Option<String>
}

impl SalesRecord {
    /// Returns the raw cell for a required column, `None` when the cell was absent.
    pub fn field(&self, column: RequiredColumn) -> Option<&str> {
        match column {
            RequiredColumn::TransactionId => self.transaction_id.as_deref(),
            RequiredColumn::ProductName => self.product_name.as_deref(),
            RequiredColumn::Amount => self.amount.as_deref()
        }
    }

    /// A cell counts as missing when it is absent or blank after trimming whitespace.
    pub fn is_missing(&self, column: RequiredColumn) -> bool {
        match self.field(column) {
            Some(value) => value.trim().is_empty(),
            None => true
        }
    }
}
