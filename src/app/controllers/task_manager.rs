use crate::app::domain::messages::TaskMessage;
use crate::app::domain::task::{Task, TaskModel, TaskStats};

pub const EMPTY_TITLE_MESSAGE: &str = "Please enter a task title.";
pub const NO_SELECTION_DELETE_MESSAGE: &str = "Please select a task to delete.";
pub const NO_SELECTION_TOGGLE_MESSAGE: &str = "Please select a task to mark.";

/// What the task manager controller needs from its window.
pub trait TaskView {
    fn entry_text(&self) -> String;
    fn clear_entry(&mut self);
    /// Zero-based index of the selected list line
    fn selected_index(&self) -> Option<usize>;
    fn show_tasks(&mut self, tasks: &[Task]);
    fn show_stats(&mut self, stats: TaskStats);
    fn show_error(&mut self, message: &str);
}

pub struct TaskManagerController<V: TaskView> {
    model: TaskModel,
    view: V,
}

impl<V: TaskView> TaskManagerController<V> {
    pub fn new(view: V) -> Self {
        Self {
            model: TaskModel::new(),
            view,
        }
    }

    pub fn handle(&mut self, msg: TaskMessage) {
        tracing::debug!(?msg, "task manager message");
        match msg {
            TaskMessage::Add => self.add(),
            TaskMessage::Delete => self.delete(),
            TaskMessage::Toggle => self.toggle(),
        }
    }

    fn add(&mut self) {
        let title = self.view.entry_text();
        match self.model.add_task(&title) {
            Ok(()) => {
                self.view.clear_entry();
                self.render();
            }
            Err(e) => {
                tracing::warn!("add rejected: {}", e);
                self.view.show_error(EMPTY_TITLE_MESSAGE);
            }
        }
    }

    fn delete(&mut self) {
        let Some(index) = self.view.selected_index() else {
            self.view.show_error(NO_SELECTION_DELETE_MESSAGE);
            return;
        };
        match self.model.delete_task(index) {
            Ok(task) => tracing::info!(index, title = %task.title, "deleted task"),
            Err(e) => {
                tracing::warn!("delete rejected: {}", e);
                self.view.show_error(NO_SELECTION_DELETE_MESSAGE);
            }
        }
        self.render();
    }

    fn toggle(&mut self) {
        let Some(index) = self.view.selected_index() else {
            self.view.show_error(NO_SELECTION_TOGGLE_MESSAGE);
            return;
        };
        match self.model.toggle_task(index) {
            Ok(done) => tracing::debug!(index, done, "toggled task"),
            Err(e) => {
                tracing::warn!("toggle rejected: {}", e);
                self.view.show_error(NO_SELECTION_TOGGLE_MESSAGE);
            }
        }
        self.render();
    }

    /// Refresh the list, then the stats line, from one read of the model.
    pub fn render(&mut self) {
        let tasks = self.model.tasks();
        let stats = self.model.stats();
        self.view.show_tasks(&tasks);
        self.view.show_stats(stats);
    }

    pub fn model(&self) -> &TaskModel {
        &self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
