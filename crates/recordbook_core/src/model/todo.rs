//! To-do item record.
//!
//! # Responsibility
//! - Define the to-do item shape with its status/priority vocabularies.
//!
//! # Invariants
//! - `id` is caller-supplied and never rewritten by `Replace`.
//! - Updates use full replace semantics; optional fields omitted from the
//!   payload become `None`.

use crate::model::record::{require_id, require_text, Record, RecordValidationError, ReplacePolicy};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Progress state of a to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    Pending,
    Completed,
    InProgress,
}

/// Relative urgency of a to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoPriority {
    Low,
    Medium,
    High,
}

/// One entry of a to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub status: TodoStatus,
    #[serde(default)]
    pub priority: Option<TodoPriority>,
    pub creation_date: NaiveDate,
    #[serde(default)]
    pub last_updated_date: Option<NaiveDate>,
}

impl TodoItem {
    /// Creates a pending item with no description, priority or update date.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        due_date: NaiveDate,
        creation_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            due_date,
            status: TodoStatus::Pending,
            priority: None,
            creation_date,
            last_updated_date: None,
        }
    }
}

impl Record for TodoItem {
    const KIND: &'static str = "todo";
    const REPLACE_POLICY: ReplacePolicy = ReplacePolicy::FullReplace;

    type Update = TodoItem;

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
        Self::validate_update(self)
    }

    fn validate_update(update: &Self::Update) -> Result<(), RecordValidationError> {
        require_text("title", &update.title)
    }
}
