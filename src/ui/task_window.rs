use fltk::{
    app::{self, Sender},
    browser::HoldBrowser,
    button::Button,
    dialog,
    enums::{Align, CallbackTrigger, Color, Event, Key},
    frame::Frame,
    group::{Flex, FlexType},
    input::Input,
    prelude::*,
    window::Window,
};

use crate::app::controllers::task_manager::TaskView;
use crate::app::domain::messages::TaskMessage;
use crate::app::domain::settings::WindowSettings;
use crate::app::domain::task::{Task, TaskStats};

use super::theme::{ChromePalette, apply_chrome};

pub const TASK_MANAGER_TITLE: &str = "Task Manager";

const ROW_HEIGHT: i32 = 30;
const STATS_HEIGHT: i32 = 24;

pub struct TaskManagerWindow {
    pub wind: Window,
    input: Input,
    list: HoldBrowser,
    stats: Frame,
    muted: Color,
}

impl TaskManagerWindow {
    pub fn build(size: WindowSettings, sender: Sender<TaskMessage>) -> Self {
        let mut wind = Window::new(100, 100, size.width, size.height, TASK_MANAGER_TITLE);
        wind.set_xclass("mvc-lab");

        let mut root = Flex::new(0, 0, size.width, size.height, None);
        root.set_type(FlexType::Column);
        root.set_margin(10);
        root.set_pad(8);

        // Entry row: Enter in the input and the Add button do the same thing
        let mut entry_row = Flex::default();
        entry_row.set_type(FlexType::Row);
        entry_row.set_pad(6);
        let mut input = Input::default();
        input.set_trigger(CallbackTrigger::EnterKey);
        input.set_callback(move |_| sender.send(TaskMessage::Add));
        let mut add_btn = Button::default().with_label("Add");
        add_btn.set_callback(move |_| sender.send(TaskMessage::Add));
        entry_row.fixed(&add_btn, 80);
        entry_row.end();
        root.fixed(&entry_row, ROW_HEIGHT);

        let mut list = HoldBrowser::default();
        list.set_callback(move |_| {
            if app::event_clicks() {
                sender.send(TaskMessage::Toggle);
            }
        });
        list.handle(move |_, ev| {
            if ev == Event::KeyDown && app::event_key() == Key::Delete {
                sender.send(TaskMessage::Delete);
                true
            } else {
                false
            }
        });

        let mut button_row = Flex::default();
        button_row.set_type(FlexType::Row);
        button_row.set_pad(6);
        let mut toggle_btn = Button::default().with_label("Mark Done / Undo");
        toggle_btn.set_callback(move |_| sender.send(TaskMessage::Toggle));
        let mut delete_btn = Button::default().with_label("Delete");
        delete_btn.set_callback(move |_| sender.send(TaskMessage::Delete));
        button_row.end();
        root.fixed(&button_row, ROW_HEIGHT);

        let mut stats = Frame::default();
        stats.set_align(Align::Left | Align::Inside);
        root.fixed(&stats, STATS_HEIGHT);

        root.end();
        wind.resizable(&root);
        wind.end();

        Self {
            wind,
            input,
            list,
            stats,
            muted: ChromePalette::for_mode(false).muted,
        }
    }

    pub fn apply_chrome(&mut self, is_dark: bool) {
        let palette = ChromePalette::for_mode(is_dark);
        apply_chrome(&mut self.wind, &palette);
        self.input.set_color(palette.field);
        self.input.set_text_color(palette.field_text);
        self.list.set_color(palette.field);
        self.list.set_text_color(palette.field_text);
        self.muted = palette.muted;
    }

    pub fn show(&mut self) {
        self.wind.show();
        let _ = self.input.take_focus();
    }
}

impl TaskView for TaskManagerWindow {
    fn entry_text(&self) -> String {
        self.input.value()
    }

    fn clear_entry(&mut self) {
        self.input.set_value("");
    }

    fn selected_index(&self) -> Option<usize> {
        // Browser lines are 1-based, 0 means no selection
        let line = self.list.value();
        if line > 0 {
            Some((line - 1) as usize)
        } else {
            None
        }
    }

    fn show_tasks(&mut self, tasks: &[Task]) {
        self.list.clear();
        for task in tasks {
            self.list.add(&task_line(task, self.muted));
        }
        self.list.redraw();
    }

    fn show_stats(&mut self, stats: TaskStats) {
        self.stats.set_label(&stats_line(stats));
    }

    fn show_error(&mut self, message: &str) {
        dialog::alert_default(message);
    }
}

/// Browser line for a task. `@.` stops format-code parsing so titles are
/// shown verbatim; done tasks get the muted colour first.
pub fn task_line(task: &Task, muted: Color) -> String {
    if task.done {
        format!("@C{}@.[x] {}", muted.bits(), task.title)
    } else {
        format!("@.[ ] {}", task.title)
    }
}

pub fn stats_line(stats: TaskStats) -> String {
    format!(
        "Tasks: {}  |  Done: {}  |  Remaining: {}",
        stats.total,
        stats.done,
        stats.remaining()
    )
}
