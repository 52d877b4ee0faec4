//! The submission record and its two on-disk line formats.

use serde::{Deserialize, Serialize};

use crate::csv;
use crate::error::CoreError;
use crate::types::{self, Timestamp};

/// Header row of the CSV store.
pub const CSV_HEADER: &str = "timestamp,name,email";

/// A name/email pair that has passed validation but has not been stored yet.
///
/// Only [`crate::validation::validate_submission`] constructs this type, so
/// holding one proves the validation rules were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    name: String,
    email: String,
}

impl NewSubmission {
    pub(crate) fn new(name: String, email: String) -> Self {
        Self { name, email }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// A persisted submission. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(with = "types::iso8601")]
    pub timestamp: Timestamp,
    pub name: String,
    pub email: String,
}

impl Submission {
    /// Assign `timestamp` to a validated submission.
    pub fn stamp(input: NewSubmission, timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            name: input.name,
            email: input.email,
        }
    }

    /// Single-line JSON object terminated by `\n`.
    pub fn to_json_line(&self) -> Result<String, CoreError> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }

    /// CSV row terminated by `\n`, cells escaped per [`csv::escape_cell`].
    pub fn to_csv_line(&self) -> String {
        let timestamp = types::format_timestamp(&self.timestamp);
        let mut line = csv::format_row(&[&timestamp, &self.name, &self.email]);
        line.push('\n');
        line
    }
}
