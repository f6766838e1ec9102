use crate::domain::board;
use crate::domain::models::{Task, TaskStatus};

/// Outcome of a single `TaskStore::move_task` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: TaskStatus, to: TaskStatus },
    AlreadyThere,
    UnknownTask,
}

/// In-memory task collection. `move_task` is the only way to change it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn snapshot(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn move_task(&mut self, task_id: &str, status: TaskStatus) -> MoveOutcome {
        let from = match self.get(task_id) {
            Some(task) => task.status,
            None => return MoveOutcome::UnknownTask,
        };
        if from == status {
            return MoveOutcome::AlreadyThere;
        }
        self.tasks = board::move_task(&self.tasks, task_id, status);
        MoveOutcome::Moved { from, to: status }
    }
}
