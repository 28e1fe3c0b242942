use crate::types::StatusCode;

/// The outcome handed back to the hosting layer: a plain-text body plus a status code.
///
/// Every validation outcome, including failures, is carried with status 200; the
/// body text is the contract. Only a completely empty request body produces 400.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ValidationResponse {
    pub body: String,
    pub status_code: StatusCode
}

impl ValidationResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status_code: 200
        }
    }

    pub fn bad_request(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status_code: 400
        }
    }
}
