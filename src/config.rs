use crate::domain::models::TaskStatus;

pub const BOARD_TITLE: &str = "Kanban Board";

/// Characters of a description shown on a card before it is cut off.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 45;

pub const DRAG_MIME: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnColor {
    Amber,
    Blue,
    Green,
}

impl ColumnColor {
    pub fn class(&self) -> &'static str {
        match self {
            ColumnColor::Amber => "accent-amber",
            ColumnColor::Blue => "accent-blue",
            ColumnColor::Green => "accent-green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub title: &'static str,
    pub status: TaskStatus,
    pub color: ColumnColor,
}

pub const COLUMNS: [ColumnSpec; 3] = [
    ColumnSpec { title: "TODO", status: TaskStatus::Todo, color: ColumnColor::Amber },
    ColumnSpec { title: "IN PROGRESS", status: TaskStatus::InProgress, color: ColumnColor::Blue },
    ColumnSpec { title: "DONE", status: TaskStatus::Done, color: ColumnColor::Green },
];

pub fn column_for(status: TaskStatus) -> ColumnSpec {
    match status {
        TaskStatus::Todo => COLUMNS[0],
        TaskStatus::InProgress => COLUMNS[1],
        TaskStatus::Done => COLUMNS[2],
    }
}
