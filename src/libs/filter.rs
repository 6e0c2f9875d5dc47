//! Pure visibility filtering over the task list.
//!
//! Filtering never reorders or renumbers: it only decides, task by task,
//! whether an entry is shown. Displayed numbers stay the full-list
//! positions so a filtered view still matches what `done`, `edit` and
//! `move` act on.

use crate::libs::task::{Priority, Task};

/// Completion dimension of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StatusFilter {
    /// Only tasks that are not completed.
    Active,
    /// Only completed tasks.
    Completed,
}

/// Optional constraints narrowing the displayed task subset.
///
/// Every dimension defaults to "no constraint"; constraints compose with
/// logical AND.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring match on the task text. Empty means
    /// unconstrained.
    pub search: String,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub status: Option<StatusFilter>,
}

/// Decides whether a task passes every active constraint.
pub fn is_visible(task: &Task, criteria: &FilterCriteria) -> bool {
    let matches_search =
        criteria.search.is_empty() || task.text.to_lowercase().contains(&criteria.search.to_lowercase());
    let matches_priority = criteria.priority.is_none_or(|p| p == task.priority);
    let matches_category = criteria.category.as_deref().is_none_or(|c| c == task.category);
    let matches_status = match criteria.status {
        None => true,
        Some(StatusFilter::Completed) => task.completed,
        Some(StatusFilter::Active) => !task.completed,
    };

    matches_search && matches_priority && matches_category && matches_status
}

/// Returns the surviving tasks in their original relative order.
pub fn apply<'a>(tasks: &'a [Task], criteria: &FilterCriteria) -> Vec<&'a Task> {
    tasks.iter().filter(|t| is_visible(t, criteria)).collect()
}
