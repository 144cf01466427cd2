use super::style::{StyleKey, StyleValue};
use super::style_model::Theme;

/// Messages sent through the style lab's FLTK channel.
/// Each button is built with one of these; the dispatch loop in main hands
/// them to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleMessage {
    Theme(Theme),
    SetParam(StyleKey, StyleValue),
    ResetDefault,
}

/// Messages sent through the task manager's FLTK channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskMessage {
    Add,
    Delete,
    Toggle,
}
