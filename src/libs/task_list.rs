//! The task list state machine.
//!
//! This module owns the ordered list of tasks and the single-slot editing
//! session, and is the only place that mutates either. Every command is a
//! synchronous transition: it either applies fully and persists, or it is
//! rejected up front as a no-op. Presentation code holds read snapshots
//! only and forwards intents through the methods here.
//!
//! ## Invariants
//!
//! - After any structural change (add, delete, reorder) the `number`
//!   fields form exactly `1..=len`, in list order.
//! - At most one task is in edit mode, and the open session always
//!   references a task that is still in the list; deleting the task under
//!   edit closes the session.
//!
//! ## Editing modes
//!
//! The list is either **Viewing** (no session) or **Editing** (one open
//! draft). `start_edit` enters Editing, discarding any prior draft
//! (last start wins); `save_edit` returns to Viewing. There is no
//! explicit cancel: starting an edit elsewhere is the only way to drop an
//! unsaved draft.
//!
//! ## Persistence
//!
//! The store is injected at construction and the committed list is saved
//! after every transition. A failed save is reported as a warning and the
//! in-memory state stays authoritative; the next successful save catches
//! the file up.

use crate::libs::storage::TaskStore;
use crate::libs::task::{default_category, Priority, Task};
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use uuid::Uuid;

/// Transient draft state for an in-place edit of one task.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Id of the task being edited.
    pub id: Uuid,
    /// Draft text, committed on save.
    pub text: String,
    /// Draft priority, committed on save.
    pub priority: Priority,
}

/// Owner of the ordered task list and the editing session.
pub struct TaskList {
    tasks: Vec<Task>,
    editing: Option<EditSession>,
    store: TaskStore,
}

impl TaskList {
    /// Loads the list from the default platform location.
    pub fn open() -> Result<Self> {
        Ok(Self::with_store(TaskStore::new()?))
    }

    /// Loads the list from an explicit store.
    ///
    /// Numbers are recomputed immediately so a hand-edited or legacy file
    /// cannot violate the ordering invariant.
    pub fn with_store(store: TaskStore) -> Self {
        let mut list = TaskList {
            tasks: store.load(),
            editing: None,
            store,
        };
        list.renumber();
        list
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Looks a task up by its displayed 1-based number.
    pub fn by_number(&self, number: usize) -> Option<&Task> {
        self.tasks.iter().find(|t| t.number == number)
    }

    /// The open edit session, if the list is in Editing mode.
    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// Appends a new task and persists.
    ///
    /// Text is trimmed first; an empty result rejects the command without
    /// touching the list. `category` falls back to `"general"`.
    pub fn add(&mut self, text: &str, priority: Priority, category: Option<&str>) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let category = category
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .unwrap_or_else(default_category);
        self.tasks.push(Task::new(text, priority, &category));
        self.renumber();
        self.persist();
        self.tasks.last()
    }

    /// Removes the task with the given id and persists.
    ///
    /// Returns `false` (leaving the list untouched) if no task matches.
    /// If the removed task was being edited, the session is closed.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }

        if self.editing.as_ref().is_some_and(|s| s.id == id) {
            self.editing = None;
        }
        self.renumber();
        self.persist();
        true
    }

    /// Flips completion for the matching task and persists.
    ///
    /// Returns the new completion state, or `None` if the id is unknown.
    pub fn toggle_complete(&mut self, id: Uuid) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        task.touch();
        let completed = task.completed;
        self.persist();
        Some(completed)
    }

    /// Opens an edit session for the matching task.
    ///
    /// Drafts are initialized from the task's current text and priority.
    /// Any session already open, for this task or another, is discarded.
    pub fn start_edit(&mut self, id: Uuid) -> bool {
        match self.get(id) {
            Some(task) => {
                self.editing = Some(EditSession {
                    id,
                    text: task.text.clone(),
                    priority: task.priority,
                });
                true
            }
            None => false,
        }
    }

    /// Updates the open drafts without touching the committed task.
    pub fn update_draft(&mut self, text: Option<&str>, priority: Option<Priority>) {
        if let Some(session) = self.editing.as_mut() {
            if let Some(text) = text {
                session.text = text.to_string();
            }
            if let Some(priority) = priority {
                session.priority = priority;
            }
        }
    }

    /// Commits the open drafts onto the matching task and persists.
    ///
    /// Draft text is trimmed; an empty result is committed as-is rather
    /// than rejected. Returns `false` if no session is open for `id`.
    pub fn save_edit(&mut self, id: Uuid) -> bool {
        let Some(session) = self.editing.take_if(|s| s.id == id) else {
            return false;
        };
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };

        task.text = session.text.trim().to_string();
        task.priority = session.priority;
        task.touch();
        self.persist();
        true
    }

    /// Moves the task at `from` to `to`, shifting the tasks in between.
    ///
    /// Indices are 0-based list positions. Equal or out-of-bounds indices
    /// reject the command; otherwise the list is renumbered and persisted.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.tasks.len() || to >= self.tasks.len() {
            return false;
        }

        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        self.renumber();
        self.persist();
        true
    }

    /// Reassigns `number` to match the current order, starting at 1.
    fn renumber(&mut self) {
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.number = index + 1;
        }
    }

    /// Mirrors the committed list to storage.
    ///
    /// A failed write is warned about and otherwise ignored: the
    /// in-memory state remains authoritative for the rest of the command.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.tasks) {
            msg_warning!(Message::StorageSaveFailed(e.to_string()));
        }
    }
}
