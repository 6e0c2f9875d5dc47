//! Persistent storage for the task list.
//!
//! The whole list lives in a single JSON file (`tasks.json`) in the
//! platform application data directory, written in full after every
//! committed change. There is no schema version: older files that predate
//! `priority`, `category` or the timestamps deserialize through the serde
//! defaults on [`Task`](crate::libs::task::Task).
//!
//! Read failures never abort a command. A missing file is a fresh install
//! and yields an empty list; an unreadable or corrupt file yields an empty
//! list plus a warning, so one bad write cannot brick the application.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Task list file name inside the application data directory.
pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Errors raised by the storage adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stored task list is not valid JSON")]
    Parse(#[from] serde_json::Error),
}

/// Reads and writes the serialized task list.
///
/// The store never mutates tasks; it only mirrors what the state machine
/// committed.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Opens the store at the default platform location.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(TASKS_FILE_NAME)?;
        Ok(Self { path })
    }

    /// Opens the store at an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the last persisted list.
    ///
    /// A missing file yields an empty list. A file that cannot be read or
    /// parsed also yields an empty list, after warning the user; the
    /// damaged file is left in place untouched until the next save.
    pub fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            return Vec::new();
        }

        match self.try_load() {
            Ok(tasks) => {
                msg_debug!(format!("Loaded {} tasks from {}", tasks.len(), self.path.display()));
                tasks
            }
            Err(e) => {
                msg_warning!(Message::StorageUnreadable(self.path.display().to_string(), e.to_string()));
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> Result<Vec<Task>, StorageError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        let tasks = serde_json::from_str(&raw)?;
        Ok(tasks)
    }

    /// Serializes and persists the full list.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, raw).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
