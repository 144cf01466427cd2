use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub done: bool,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub done: usize,
}

impl TaskStats {
    pub fn remaining(&self) -> usize {
        self.total - self.done
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("task title is empty")]
    EmptyTitle,

    #[error("task index {index} out of range (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered in-memory task list. Position is the task's identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskModel {
    tasks: Vec<Task>,
}

impl TaskModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. The title is trimmed and must not end up empty.
    pub fn add_task(&mut self, title: &str) -> Result<(), TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        self.tasks.push(Task::new(title));
        Ok(())
    }

    /// Remove and return the task at `index`.
    pub fn delete_task(&mut self, index: usize) -> Result<Task, TaskError> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Flip the done flag at `index`, returning the new value.
    pub fn toggle_task(&mut self, index: usize) -> Result<bool, TaskError> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];
        task.done = !task.done;
        Ok(task.done)
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats {
            total: self.tasks.len(),
            done: self.tasks.iter().filter(|t| t.done).count(),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), TaskError> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            })
        }
    }
}
