//! Two small FLTK demos built around a Model-View-Controller split.
//!
//! - `style-lab`: tweak the style of a sample widget, switch light/dark themes.
//! - `task-manager`: add, delete and toggle tasks with a live completion count.
//!
//! Models and controllers live in [`app`] and do not touch FLTK, so the
//! whole control path can be exercised without a display. Widgets live in
//! [`ui`].

pub mod app;
pub mod ui;
