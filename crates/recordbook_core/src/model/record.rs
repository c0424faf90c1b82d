//! Record contract shared by every store instantiation.
//!
//! # Responsibility
//! - Define how a store extracts the identifier of a record.
//! - Define how an update payload is folded into a stored record.
//! - Carry shape validation errors raised before records reach a store.
//!
//! # Invariants
//! - `record_id()` is stable for the lifetime of a stored record.
//! - `apply_update()` never changes the identifier of the target record.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// String identifier under which a record is stored.
pub type RecordId = String;

/// How `Replace` folds an update payload into a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacePolicy {
    /// Every field except the key is taken from the payload.
    FullReplace,
    /// Only fields present in the payload overwrite stored values.
    PartialMerge,
}

impl ReplacePolicy {
    /// Stable name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullReplace => "full_replace",
            Self::PartialMerge => "partial_merge",
        }
    }
}

/// One entity held by a record store.
pub trait Record: Clone {
    /// Lowercase record kind, used in logs and error messages.
    const KIND: &'static str;
    /// Update policy applied by `Replace` for this record kind.
    const REPLACE_POLICY: ReplacePolicy;

    /// Payload accepted by `Replace`.
    type Update;

    /// Returns the identifier this record is keyed by.
    fn record_id(&self) -> &str;

    /// Folds `update` into `self`, keeping `self`'s identifier.
    fn apply_update(&mut self, update: Self::Update);

    /// Checks the record shape, identifier included.
    fn validate(&self) -> Result<(), RecordValidationError>;

    /// Checks an update payload before it is applied.
    fn validate_update(update: &Self::Update) -> Result<(), RecordValidationError>;
}

/// Shape validation failure for a record or update payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Identifier is empty or whitespace.
    EmptyId,
    /// A required text field is empty or whitespace.
    EmptyField(&'static str),
    /// Email address is not of the form `local@domain.tld`.
    InvalidEmail(String),
    /// A numeric field that must be non-negative was negative.
    NegativeValue { field: &'static str, value: i64 },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "id must not be empty"),
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::InvalidEmail(value) => write!(f, "invalid email address `{value}`"),
            Self::NegativeValue { field, value } => {
                write!(f, "{field} must be >= 0, got {value}")
            }
        }
    }
}

impl Error for RecordValidationError {}

pub(crate) fn require_id(id: &str) -> Result<(), RecordValidationError> {
    if id.trim().is_empty() {
        return Err(RecordValidationError::EmptyId);
    }
    Ok(())
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), RecordValidationError> {
    if value.trim().is_empty() {
        return Err(RecordValidationError::EmptyField(field));
    }
    Ok(())
}

pub(crate) fn require_non_negative(
    field: &'static str,
    value: i64,
) -> Result<(), RecordValidationError> {
    if value < 0 {
        return Err(RecordValidationError::NegativeValue { field, value });
    }
    Ok(())
}
