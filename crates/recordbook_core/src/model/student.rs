//! Student record.
//!
//! # Responsibility
//! - Define the student enrollment record and its wire field names.
//! - Validate identifier and email shape before storage.
//!
//! # Invariants
//! - `id` is caller-supplied and never rewritten by `Replace`.
//! - Updates use full replace semantics.

use crate::model::record::{require_id, Record, RecordValidationError, ReplacePolicy};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex")
});

/// Enrollment record for one student.
///
/// Serialized with camelCase field names to match the student API schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub email: String,
    pub module: String,
    pub enrollment_date: NaiveDate,
}

impl Student {
    fn validate_fields(&self) -> Result<(), RecordValidationError> {
        if !EMAIL_RE.is_match(&self.email) {
            return Err(RecordValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

impl Record for Student {
    const KIND: &'static str = "student";
    const REPLACE_POLICY: ReplacePolicy = ReplacePolicy::FullReplace;

    type Update = Student;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn apply_update(&mut self, update: Self::Update) {
        let id = std::mem::take(&mut self.id);
        *self = update;
        self.id = id;
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_id(&self.id)?;
        self.validate_fields()
    }

    fn validate_update(update: &Self::Update) -> Result<(), RecordValidationError> {
        update.validate_fields()
    }
}
