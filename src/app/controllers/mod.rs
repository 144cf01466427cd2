//! Controllers layer - event dispatch.
//!
//! Each controller owns its model and a view behind a trait, turns view
//! messages into model transitions and pushes the fresh state back:
//! - Style lab
//! - Task manager

pub mod style_lab;
pub mod task_manager;
