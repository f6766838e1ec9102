use leptos::prelude::*;
use crate::config::BOARD_TITLE;

pub fn task_total_label(total: usize) -> String {
    if total == 1 {
        "1 task".to_string()
    } else {
        format!("{} tasks", total)
    }
}

#[component]
pub fn KanbanHeader(#[prop(into)] total: Signal<usize>) -> impl IntoView {
    view! {
        <header class="kanban-header">
            <h1>{BOARD_TITLE}</h1>
            <span class="kanban-total">{move || task_total_label(total.get())}</span>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::task_total_label;

    #[test]
    fn total_label_agrees_with_count() {
        assert_eq!(task_total_label(0), "0 tasks");
        assert_eq!(task_total_label(1), "1 task");
        assert_eq!(task_total_label(7), "7 tasks");
    }
}
