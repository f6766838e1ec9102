use std::collections::HashSet;

use crate::domain::log;
use crate::domain::models::Task;

const BUNDLED_TASKS: &str = include_str!("../../../data/tasks.json");

// Parse a task list and make sure every id appears once
pub fn parse_tasks(json: &str) -> Result<Vec<Task>, String> {
    let tasks: Vec<Task> =
        serde_json::from_str(json).map_err(|e| format!("Failed to parse task data: {}", e))?;

    let mut seen = HashSet::new();
    for task in &tasks {
        if !seen.insert(task.id.as_str()) {
            return Err(format!("Duplicate task id in task data: {}", task.id));
        }
    }

    Ok(tasks)
}

// Tasks shipped with the app, or an empty board if the bundle is broken
pub fn load_bundled_tasks() -> Vec<Task> {
    match parse_tasks(BUNDLED_TASKS) {
        Ok(tasks) => {
            log::info(&format!("Loaded {} tasks", tasks.len()));
            tasks
        }
        Err(e) => {
            log::error(&format!("Failed to load tasks: {}", e));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_tasks_are_valid() {
        let tasks = parse_tasks(BUNDLED_TASKS).unwrap();
        assert!(!tasks.is_empty());
        assert_eq!(load_bundled_tasks(), tasks);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id":"1","title":"a","description":"","assignedTo":{"id":"u","name":"N"},"status":"TODO","createdAt":"2024-01-01"},
            {"id":"1","title":"b","description":"","assignedTo":{"id":"u","name":"N"},"status":"DONE","createdAt":"2024-01-02"}
        ]"#;
        let err = parse_tasks(json).unwrap_err();
        assert!(err.contains("Duplicate task id"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_tasks("{").is_err());
        assert!(parse_tasks(r#"[{"id":"1"}]"#).is_err());
        assert_eq!(parse_tasks("[]").unwrap(), Vec::<Task>::new());
    }
}
