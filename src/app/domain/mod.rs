pub mod messages;
pub mod settings;
pub mod style;
pub mod style_model;
pub mod task;

pub use messages::{StyleMessage, TaskMessage};
pub use settings::{AppSettings, ThemeMode, WindowSettings};
pub use style::{
    Anchor, CursorShape, Justify, Relief, StyleDict, StyleError, StyleKey, StyleOption, StyleValue,
    ValueKind, WidgetState, option_table,
};
pub use style_model::{StyleModel, Theme};
pub use task::{Task, TaskError, TaskModel, TaskStats};
