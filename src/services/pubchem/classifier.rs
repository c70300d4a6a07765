use serde_json::Value;

use super::ServiceError;

pub const SERVER_BUSY_CODE: u16 = 504;
pub const NOT_FOUND_CODE: u16 = 404;
pub const MESSAGE_GENERIC_REQUEST_ERROR: &str = "It was not possible to execute your request.";

/// User-facing text for the status codes PubChem documents.
pub const HTTP_ERRORS: &[(u16, &str)] = &[
    (400, "Request is improperly formed. Wrong parameters."),
    (NOT_FOUND_CODE, "The search criteria was not found."),
    (405, "Invalid request."),
    (500, "Some problem on the server side. Please try again later."),
    (501, "The requested operation has not (yet) been implemented by the server."),
    (
        SERVER_BUSY_CODE,
        "The request timed out, from server overload or too broad a request. Please try again later.",
    ),
];

pub fn status_message(code: u16) -> Option<&'static str> {
    HTTP_ERRORS.iter().find(|(c, _)| *c == code).map(|(_, m)| *m)
}

/// Result of one service call. `detail` is the raw error for the logs and is
/// never shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceOutcome {
    Success(Value),
    NotFound { message: String, detail: String },
    Busy { message: String, detail: String },
    OtherError { message: String, detail: String },
}

impl ServiceOutcome {
    /// Only `Busy` may be retried, and only after the user confirms.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ServiceOutcome::Busy { .. })
    }

    pub fn user_message(&self) -> Option<&str> {
        match self {
            ServiceOutcome::Success(_) => None,
            ServiceOutcome::NotFound { message, .. }
            | ServiceOutcome::Busy { message, .. }
            | ServiceOutcome::OtherError { message, .. } => Some(message),
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ServiceOutcome::Success(_) => None,
            ServiceOutcome::NotFound { detail, .. }
            | ServiceOutcome::Busy { detail, .. }
            | ServiceOutcome::OtherError { detail, .. } => Some(detail),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RetryClassifier;

impl RetryClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, result: Result<Value, ServiceError>) -> ServiceOutcome {
        match result {
            Ok(payload) => ServiceOutcome::Success(payload),
            Err(ServiceError::Status { code, .. }) => self.classify_status(code),
            Err(other) => ServiceOutcome::OtherError {
                message: MESSAGE_GENERIC_REQUEST_ERROR.to_string(),
                detail: format!("{:?}", other),
            },
        }
    }

    pub fn classify_status(&self, code: u16) -> ServiceOutcome {
        let detail = format!("HTTP status {}", code);
        match status_message(code) {
            Some(message) if code == SERVER_BUSY_CODE => ServiceOutcome::Busy {
                message: message.to_string(),
                detail,
            },
            Some(message) if code == NOT_FOUND_CODE => ServiceOutcome::NotFound {
                message: message.to_string(),
                detail,
            },
            Some(message) => ServiceOutcome::OtherError {
                message: message.to_string(),
                detail,
            },
            None => ServiceOutcome::OtherError {
                message: MESSAGE_GENERIC_REQUEST_ERROR.to_string(),
                detail,
            },
        }
    }
}
