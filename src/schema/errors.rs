//! Validation error types
//!
//! Error codes:
//! - INGEST_EMPTY_BATCH
//! - INGEST_FIELD_REQUIRED
//! - INGEST_INVALID_EVENT_TYPE
//! - INGEST_INVALID_URL

use std::fmt;

/// Validation-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorCode {
    /// Batch has no events
    EmptyBatch,
    /// A required field is absent or empty
    FieldRequired,
    /// `eventType` is not one of the accepted variants
    InvalidEventType,
    /// `pageUrl` is not a valid absolute URL
    InvalidUrl,
}

impl ValidationErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorCode::EmptyBatch => "INGEST_EMPTY_BATCH",
            ValidationErrorCode::FieldRequired => "INGEST_FIELD_REQUIRED",
            ValidationErrorCode::InvalidEventType => "INGEST_INVALID_EVENT_TYPE",
            ValidationErrorCode::InvalidUrl => "INGEST_INVALID_URL",
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Which field of which event failed, and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Position of the event in the batch
    pub index: usize,
    /// Wire name of the field (e.g. "pageUrl")
    pub field: String,
    /// Expected condition
    pub expected: String,
    /// Actual value found
    pub actual: String,
}

impl FieldViolation {
    pub fn new(
        index: usize,
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            index,
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing(index: usize, field: impl Into<String>) -> Self {
        Self::new(index, field, "non-empty value", "empty")
    }

    /// Field path, e.g. `events[2].pageUrl`
    pub fn path(&self) -> String {
        format!("events[{}].{}", self.index, self.field)
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: expected {}, got {}", self.path(), self.expected, self.actual)
    }
}

/// A batch failed structural or semantic validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    code: ValidationErrorCode,
    message: String,
    violation: Option<FieldViolation>,
}

impl ValidationError {
    pub fn empty_batch() -> Self {
        Self {
            code: ValidationErrorCode::EmptyBatch,
            message: "No events found".into(),
            violation: None,
        }
    }

    pub fn field_required(index: usize, field: &str) -> Self {
        Self::from_violation(ValidationErrorCode::FieldRequired, FieldViolation::missing(index, field))
    }

    pub fn invalid_event_type(index: usize, actual: &str) -> Self {
        let expected = format!(
            "one of {}",
            crate::schema::EventType::ALL.map(|t| t.as_str()).join(", ")
        );
        Self::from_violation(
            ValidationErrorCode::InvalidEventType,
            FieldViolation::new(index, "eventType", expected, format!("{:?}", actual)),
        )
    }

    pub fn invalid_url(index: usize, actual: &str, reason: impl fmt::Display) -> Self {
        Self::from_violation(
            ValidationErrorCode::InvalidUrl,
            FieldViolation::new(
                index,
                "pageUrl",
                "valid absolute URL",
                format!("{:?} ({})", actual, reason),
            ),
        )
    }

    fn from_violation(code: ValidationErrorCode, violation: FieldViolation) -> Self {
        Self {
            code,
            message: violation.to_string(),
            violation: Some(violation),
        }
    }

    pub fn code(&self) -> ValidationErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Offending field, absent for batch-level failures
    pub fn violation(&self) -> Option<&FieldViolation> {
        self.violation.as_ref()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
