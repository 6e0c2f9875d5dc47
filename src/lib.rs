//! # Tudu - Terminal todo list manager
//!
//! A command-line application for creating, organizing and tracking
//! everyday tasks.
//!
//! ## Features
//!
//! - **Task Management**: Add, edit, complete, delete and reorder tasks
//! - **Filtering**: Narrow the list by text search, priority, category and status
//! - **Statistics**: Completion totals and rate for the whole list
//! - **Local Persistence**: The full list is stored as a single JSON snapshot
//! - **Data Export**: Export tasks to CSV, JSON and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
