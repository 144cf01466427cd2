//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Models and their data (style mappings, tasks, settings, messages)
//! - `controllers/` - Event dispatch from views into models and back
//! - `infrastructure/` - Errors, logging, platform detection

pub mod controllers;
pub mod domain;
pub mod infrastructure;

// Re-exports for convenient external access
pub use controllers::style_lab::{StyleLabController, StyleView};
pub use controllers::task_manager::{TaskManagerController, TaskView};
pub use domain::{
    AppSettings, StyleDict, StyleKey, StyleMessage, StyleModel, StyleValue, Task, TaskMessage,
    TaskModel, TaskStats, Theme, ThemeMode,
};
pub use infrastructure::error::{AppError, Result};
