use super::SalesValidator;

use crate::models::ValidationResponse;

fn validate(body: &str) -> ValidationResponse {
    SalesValidator::new().validate(body.as_bytes())
}

#[test]
fn test_validator_passes_fully_valid_input() {
    let response = validate("TransactionID,ProductName,Amount\nT1,Widget,10\nT2,Gadget,3.50");

    assert_eq!(response.body, "Validation Passed");
    assert_eq!(response.status_code, 200);
}

#[test]
fn test_validator_passes_input_with_header_only() {
    let response = validate("TransactionID,ProductName,Amount\n");

    assert_eq!(response.body, "Validation Passed");
    assert_eq!(response.status_code, 200);
}

#[test]
fn test_validator_rejects_empty_body_with_status_400() {
    let response = SalesValidator::new().validate(&[]);

    assert_eq!(response.body, "Please pass the CSV data in the request body");
    assert_eq!(response.status_code, 400);
}

#[test]
fn test_validator_reports_missing_columns_in_required_order() {
    let response = validate("ProductName,Region\nWidget,EMEA");

    assert_eq!(response.body, "Invalid Data: Missing columns - TransactionID, Amount");
    assert_eq!(response.status_code, 200);
}

#[test]
fn test_validator_skips_row_checks_when_columns_are_missing() {
    // Rows are broken too, but only the column report may surface.
    let response = validate("TransactionID,ProductName\n,\nT2,");

    assert_eq!(response.body, "Invalid Data: Missing columns - Amount");
    assert!(!response.body.contains("Missing value"));
}

#[test]
fn test_validator_reports_blank_product_name_with_display_line_number() {
    let response = validate("TransactionID,ProductName,Amount\nT1,,10");

    assert_eq!(response.body, "Invalid Data: \nRow 2: Missing value for ProductName");
    assert_eq!(response.status_code, 200);
}

#[test]
fn test_validator_treats_whitespace_only_cells_as_missing() {
    let response = validate("TransactionID,ProductName,Amount\nT1,   ,10");

    assert_eq!(response.body, "Invalid Data: \nRow 2: Missing value for ProductName");
}

#[test]
fn test_validator_reports_negative_amount_with_parsed_value() {
    let response = validate("TransactionID,ProductName,Amount\nT1,Widget,-5");

    assert_eq!(response.body, "Invalid Data: \nRow 2: Negative amount (-5.0) is not allowed.");
    assert_eq!(response.status_code, 200);
}

#[test]
fn test_validator_reports_invalid_amount_format_with_original_cell() {
    let response = validate("TransactionID,ProductName,Amount\nT1,Widget,abc");

    assert_eq!(response.body, "Invalid Data: \nRow 2: Invalid format for Amount ('abc')");
    assert_eq!(response.status_code, 200);
}

#[test]
fn test_validator_reports_blank_amount_as_missing_without_numeric_error() {
    let response = validate("TransactionID,ProductName,Amount\nT1,Widget,");

    assert_eq!(response.body, "Invalid Data: \nRow 2: Missing value for Amount");
    assert!(!response.body.contains("Invalid format"));
}

#[test]
fn test_validator_accepts_zero_and_positive_amounts() {
    let response = validate("TransactionID,ProductName,Amount\nT1,Widget,0\nT2,Gadget,0.01");

    assert_eq!(response.body, "Validation Passed");
}

#[test]
fn test_validator_orders_errors_by_row_then_check() {
    let body = "TransactionID,ProductName,Amount\nT1,Widget,10\nT2,,-3\nT3,Gadget,xyz";
    let response = validate(body);

    let expected = "Invalid Data: \n\
                    Row 3: Missing value for ProductName\n\
                    Row 3: Negative amount (-3.0) is not allowed.\n\
                    Row 4: Invalid format for Amount ('xyz')";

    assert_eq!(response.body, expected);
    assert_eq!(response.status_code, 200);
}

#[test]
fn test_validator_ignores_extra_columns_and_header_order() {
    let response = validate("Amount,Region,ProductName,TransactionID\n10,EMEA,Widget,T1");

    assert_eq!(response.body, "Validation Passed");
}

#[test]
fn test_validator_reports_processing_error_for_invalid_utf8() {
    let response = SalesValidator::new().validate(&[0xff, 0xfe, 0x41]);

    assert!(response.body.starts_with("Invalid Data: Error processing file - "));
    assert_eq!(response.status_code, 200);
}

#[test]
fn test_validator_reports_processing_error_for_blank_header() {
    let response = validate("   \nT1,Widget,10");

    assert_eq!(
        response.body,
        "Invalid Data: Error processing file - No columns to parse from input"
    );
    assert_eq!(response.status_code, 200);
}

#[test]
fn test_validator_is_idempotent_across_invocations() {
    let body = "TransactionID,ProductName,Amount\nT1,,xyz";
    let validator = SalesValidator::new();

    let first = validator.validate(body.as_bytes());
    let second = validator.validate(body.as_bytes());

    assert_eq!(first, second);
}
