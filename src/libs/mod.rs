//! Core library modules for the tudu application.
//!
//! Everything with behavior lives here; the `commands` modules only parse
//! arguments, resolve displayed numbers to task ids and render results.
//!
//! - **Task list core**: [`task`], [`task_list`], [`filter`], [`stats`]
//! - **Persistence**: [`storage`], [`data_storage`], [`config`]
//! - **User interface**: [`view`], [`export`], [`messages`]

pub mod config;
pub mod data_storage;
pub mod export;
pub mod filter;
pub mod messages;
pub mod stats;
pub mod storage;
pub mod task;
pub mod task_list;
pub mod view;
