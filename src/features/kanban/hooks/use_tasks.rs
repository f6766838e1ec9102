use leptos::prelude::*;
use crate::domain::board::{partition_by_status, StatusPartition};
use crate::domain::log;
use crate::domain::models::{Task, TaskStatus};
use crate::domain::store::{MoveOutcome, TaskStore};

pub struct TasksHook {
    pub store: ReadSignal<TaskStore>,
    pub columns: Memo<StatusPartition>,
    pub move_task: Callback<(String, TaskStatus)>,
}

pub fn use_tasks(initial: Vec<Task>) -> TasksHook {
    let store = RwSignal::new(TaskStore::new(initial));

    // Recomputed once per change, shared by all three columns
    let columns = Memo::new(move |_| store.with(|store| partition_by_status(store.snapshot())));

    let move_task = Callback::new(move |(task_id, status): (String, TaskStatus)| {
        // Only notify subscribers when something actually changed
        let outcome = store.try_update_untracked(|store| store.move_task(&task_id, status));
        match outcome {
            Some(MoveOutcome::Moved { from, to }) => {
                store.notify();
                log::info(&format!(
                    "Task {} moved from {} to {}",
                    task_id,
                    from.as_str(),
                    to.as_str()
                ));
            }
            Some(MoveOutcome::AlreadyThere) => {}
            Some(MoveOutcome::UnknownTask) => {
                log::info(&format!("Ignoring drop for unknown task {}", task_id));
            }
            None => log::error("Task store is no longer available"),
        }
    });

    TasksHook {
        store: store.read_only(),
        columns,
        move_task,
    }
}
