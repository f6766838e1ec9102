use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::config::DESCRIPTION_PREVIEW_CHARS;
use crate::domain::models::{Task, TaskStatus};

/// Returns a copy of `tasks` where the task with `task_id` carries `status`.
///
/// An unknown id leaves the collection as it was; so does moving a task to
/// the status it already has.
pub fn move_task(tasks: &[Task], task_id: &str, status: TaskStatus) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == task_id {
                task.with_status(status)
            } else {
                task.clone()
            }
        })
        .collect()
}

/// The three column views of a task list, each in original relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPartition {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl StatusPartition {
    pub fn get(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }
}

pub fn partition_by_status(tasks: &[Task]) -> StatusPartition {
    let mut partition = StatusPartition::default();
    for task in tasks {
        match task.status {
            TaskStatus::Todo => partition.todo.push(task.clone()),
            TaskStatus::InProgress => partition.in_progress.push(task.clone()),
            TaskStatus::Done => partition.done.push(task.clone()),
        }
    }
    partition
}

pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Formats a `createdAt` value in the viewer's local time.
pub fn format_created_at(raw: &str) -> String {
    format_created_at_in(raw, &Local)
}

/// Accepts RFC 3339 timestamps, bare date-times with or without seconds
/// (read as wall-clock time in `tz`) and bare dates (read as UTC midnight).
pub fn format_created_at_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let raw = raw.trim();
    let parsed: Option<DateTime<Tz>> = if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        Some(dt.with_timezone(tz))
    } else if let Some(naive) = parse_naive_date_time(raw) {
        tz.from_local_datetime(&naive).earliest()
    } else if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        date.and_hms_opt(0, 0, 0)
            .map(|midnight| Utc.from_utc_datetime(&midnight).with_timezone(tz))
    } else {
        None
    };

    match parsed {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_naive_date_time(raw: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::User;
    use chrono::FixedOffset;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {id}"),
            description: format!("Description of task {id}"),
            assigned_to: User { id: "u1".to_string(), name: "Ana".to_string() },
            status,
            created_at: "2024-03-01T09:30:00Z".to_string(),
        }
    }

    fn mixed() -> Vec<Task> {
        vec![
            task("1", TaskStatus::Todo),
            task("2", TaskStatus::Done),
            task("3", TaskStatus::InProgress),
            task("4", TaskStatus::Todo),
            task("5", TaskStatus::Done),
        ]
    }

    #[test]
    fn move_task_changes_only_the_status_of_the_target() {
        let tasks = mixed();
        for original in &tasks {
            for status in TaskStatus::all() {
                let moved = move_task(&tasks, &original.id, status);
                assert_eq!(moved.len(), tasks.len());
                for (before, after) in tasks.iter().zip(&moved) {
                    if before.id == original.id {
                        assert_eq!(after.status, status);
                        assert_eq!(after, &before.with_status(status));
                    } else {
                        assert_eq!(after, before);
                    }
                }
            }
        }
    }

    #[test]
    fn move_task_with_unknown_id_is_a_no_op() {
        let tasks = mixed();
        assert_eq!(move_task(&tasks, "missing", TaskStatus::Done), tasks);
        assert_eq!(move_task(&[], "1", TaskStatus::Done), Vec::<Task>::new());
    }

    #[test]
    fn move_task_to_current_status_is_a_no_op() {
        let tasks = mixed();
        assert_eq!(move_task(&tasks, "2", TaskStatus::Done), tasks);
    }

    #[test]
    fn partition_covers_every_task_once_in_order() {
        let tasks = mixed();
        let partition = partition_by_status(&tasks);

        let total: usize = TaskStatus::all().iter().map(|s| partition.get(*s).len()).sum();
        assert_eq!(total, tasks.len());
        for status in TaskStatus::all() {
            let expected: Vec<Task> = tasks.iter().filter(|t| t.status == status).cloned().collect();
            assert_eq!(partition.get(status), expected.as_slice());
        }
        let ids: Vec<&str> = partition.todo.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "4"]);

        let mut seen: Vec<&str> = TaskStatus::all()
            .iter()
            .flat_map(|s| partition.get(*s).iter().map(|t| t.id.as_str()))
            .collect();
        seen.sort();
        assert_eq!(seen, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn partition_of_empty_list_is_empty() {
        let partition = partition_by_status(&[]);
        assert!(TaskStatus::all().iter().all(|s| partition.get(*s).is_empty()));
    }

    #[test]
    fn moving_a_card_updates_column_counts() {
        let tasks = vec![task("1", TaskStatus::Todo), task("2", TaskStatus::Done)];
        let moved = move_task(&tasks, "1", TaskStatus::InProgress);

        assert_eq!(moved[0].id, "1");
        assert_eq!(moved[0].status, TaskStatus::InProgress);
        assert_eq!(moved[1], tasks[1]);

        let partition = partition_by_status(&moved);
        assert_eq!(partition.get(TaskStatus::Todo).len(), 0);
        assert_eq!(partition.get(TaskStatus::InProgress).len(), 1);
        assert_eq!(partition.get(TaskStatus::Done).len(), 1);
    }

    #[test]
    fn move_leaves_uninvolved_column_equal() {
        let tasks = mixed();
        let before = partition_by_status(&tasks);
        let after = partition_by_status(&move_task(&tasks, "1", TaskStatus::InProgress));

        assert_eq!(after.get(TaskStatus::Done), before.get(TaskStatus::Done));
        assert_ne!(after.get(TaskStatus::Todo), before.get(TaskStatus::Todo));
        assert_ne!(after.get(TaskStatus::InProgress), before.get(TaskStatus::InProgress));
    }

    #[test]
    fn short_descriptions_are_shown_verbatim() {
        assert_eq!(truncate_description(""), "");
        assert_eq!(truncate_description("Fix login"), "Fix login");
        let exact = "a".repeat(DESCRIPTION_PREVIEW_CHARS);
        assert_eq!(truncate_description(&exact), exact);
    }

    #[test]
    fn long_descriptions_are_cut_with_ellipsis() {
        let long = "b".repeat(DESCRIPTION_PREVIEW_CHARS + 1);
        let expected = format!("{}...", "b".repeat(DESCRIPTION_PREVIEW_CHARS));
        assert_eq!(truncate_description(&long), expected);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "é".repeat(DESCRIPTION_PREVIEW_CHARS + 5);
        let shown = truncate_description(&long);
        assert_eq!(shown.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn formats_rfc3339_in_requested_zone() {
        assert_eq!(format_created_at_in("2024-03-01T09:30:05Z", &Utc), "3/1/2024, 9:30:05 AM");
        assert_eq!(
            format_created_at_in("2024-03-01T21:07:00+02:00", &Utc),
            "3/1/2024, 7:07:00 PM"
        );
        let east = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_created_at_in("2024-12-31T23:15:00Z", &east), "1/1/2025, 12:15:00 AM");
    }

    #[test]
    fn formats_bare_dates_and_date_times() {
        assert_eq!(format_created_at_in("2024-05-09", &Utc), "5/9/2024, 12:00:00 AM");
        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_created_at_in("2024-05-09T14:00:00", &west), "5/9/2024, 2:00:00 PM");
    }

    #[test]
    fn formats_date_times_without_seconds() {
        assert_eq!(format_created_at_in("2024-05-09T14:00", &Utc), "5/9/2024, 2:00:00 PM");
        assert_eq!(format_created_at_in("2024-05-09T07:45", &Utc), "5/9/2024, 7:45:00 AM");
    }

    #[test]
    fn unparsable_timestamps_render_as_invalid_date() {
        assert_eq!(format_created_at_in("yesterday", &Utc), INVALID_DATE);
        assert_eq!(format_created_at_in("", &Utc), INVALID_DATE);
    }
}
