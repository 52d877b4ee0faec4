//! Submission payload validation.
//!
//! Requests are first parsed into [`SubmissionInput`], which accepts any JSON
//! shape, then [`validate_submission`] turns that into a [`NewSubmission`] or
//! a [`CoreError::Validation`] carrying the client-facing reason.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::CoreError;
use crate::submission::NewSubmission;

/// Minimum name length after trimming surrounding whitespace.
pub const MIN_NAME_CHARS: usize = 2;

pub const INVALID_NAME_MESSAGE: &str = "invalid name, use at least 2 characters.";
pub const INVALID_EMAIL_MESSAGE: &str = "invalid email.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid regex"));

/// Raw submission fields as received. `None` means missing or not a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl SubmissionInput {
    /// Extract the fields from an arbitrary JSON value.
    ///
    /// Never fails: non-object bodies, missing keys, `null` and non-string
    /// values all collapse to `None`.
    pub fn from_json(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            name: field("name"),
            email: field("email"),
        }
    }
}

/// Apply the submission rules in order; the first failure wins.
///
/// 1. `name` is a string of at least [`MIN_NAME_CHARS`] characters once trimmed.
/// 2. `email` is a string matching `^\S+@\S+\.\S+$`.
///
/// The accepted values are kept verbatim (not trimmed).
pub fn validate_submission(input: SubmissionInput) -> Result<NewSubmission, CoreError> {
    let name = match input.name {
        Some(name) if name.trim().chars().count() >= MIN_NAME_CHARS => name,
        _ => return Err(CoreError::Validation(INVALID_NAME_MESSAGE.into())),
    };

    let email = match input.email {
        Some(email) if EMAIL_RE.is_match(&email) => email,
        _ => return Err(CoreError::Validation(INVALID_EMAIL_MESSAGE.into())),
    };

    Ok(NewSubmission::new(name, email))
}
