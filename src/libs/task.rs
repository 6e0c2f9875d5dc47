//! Task model shared by the state machine, storage and presentation layers.
//!
//! A task is persisted exactly as it is defined here: the serialized field
//! names are camelCase and every field that later releases added
//! (`priority`, `category`, the timestamps) carries a serde default, so
//! task files written by early versions still load.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Task importance level.
///
/// Stored lowercase (`"low"`, `"medium"`, `"high"`) and accepted in the
/// same form on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// A single todo entry.
///
/// `number` is the 1-based position in the list and is recomputed by the
/// task list after every structural change; it is stored only so that the
/// persisted file mirrors what the user sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub number: usize,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "Local::now")]
    pub created_at: DateTime<Local>,
    #[serde(default = "Local::now")]
    pub updated_at: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

pub fn default_category() -> String {
    "general".to_string()
}

impl Task {
    /// Creates a task with a fresh id and both timestamps set to now.
    ///
    /// `number` starts at 0; the owning list assigns the real position
    /// when it renumbers.
    pub fn new(text: &str, priority: Priority, category: &str) -> Self {
        let now = Local::now();
        Task {
            id: Uuid::new_v4(),
            text: text.to_string(),
            completed: false,
            number: 0,
            priority,
            due_date: None,
            category: category.to_string(),
            created_at: now,
            updated_at: now,
            notes: None,
        }
    }

    /// Refreshes the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Local::now();
    }
}
