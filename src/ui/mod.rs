//! FLTK views. Each window implements its controller's view trait.

pub mod colors;
pub mod sample;
pub mod style_window;
pub mod task_window;
pub mod theme;
