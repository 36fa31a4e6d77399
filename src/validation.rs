/**
 * Request Validation
 *
 * Field-level validation for request bodies. Violations are collected rather
 * than short-circuited so a single response can list every failed field, in
 * the shape `{"errors": [{"msg": ..., "param": ...}, ..]}`.
 */

use serde::Serialize;

use crate::error::ApiError;

/// A single violated field, as rendered in the error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub msg: String,
    pub param: String,
}

impl FieldError {
    pub fn new(msg: impl Into<String>, param: impl Into<String>) -> Self {
        FieldError {
            msg: msg.into(),
            param: param.into(),
        }
    }
}

/// Collects field violations across a request body.
///
/// Validation always runs before any persistence call; a non-empty collection
/// turns into `ApiError::Validation` at `finish`.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Validator::default()
    }

    /// The field must be present and non-empty after trimming.
    pub fn require(&mut self, value: Option<&str>, param: &str, msg: &str) {
        if value.map(str::trim).unwrap_or_default().is_empty() {
            self.errors.push(FieldError::new(msg, param));
        }
    }

    /// The field must be a syntactically plausible email address.
    pub fn require_email(&mut self, value: Option<&str>, param: &str, msg: &str) {
        if !value.is_some_and(is_valid_email) {
            self.errors.push(FieldError::new(msg, param));
        }
    }

    /// The field must be present and at least `min` characters long.
    pub fn require_min_len(&mut self, value: Option<&str>, min: usize, param: &str, msg: &str) {
        if value.map(|v| v.chars().count()).unwrap_or_default() < min {
            self.errors.push(FieldError::new(msg, param));
        }
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.errors))
        }
    }
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliverability is not our problem.
pub fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
