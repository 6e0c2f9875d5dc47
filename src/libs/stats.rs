use crate::libs::task::Task;

/// Aggregate completion statistics for the whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Completed share of the list in percent, rounded; 0 for an empty list.
    pub completion_rate: u32,
}

impl Stats {
    pub fn collect(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let pending = total - completed;
        let completion_rate = if total > 0 {
            (completed as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        };

        Stats {
            total,
            completed,
            pending,
            completion_rate,
        }
    }
}
