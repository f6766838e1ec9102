use leptos::prelude::*;
use crate::config::COLUMNS;
use crate::domain::models::Task;
use crate::features::kanban::hooks::{use_tasks, TasksHook};
use super::{KanbanColumn, KanbanHeader};

#[component]
pub fn KanbanBoard(initial_tasks: Vec<Task>) -> impl IntoView {
    let TasksHook { store, columns, move_task } = use_tasks(initial_tasks);
    let total = Signal::derive(move || store.with(|store| store.snapshot().len()));

    view! {
        <div class="kanban-page">
            <KanbanHeader total=total />
            <div class="kanban-board">
                {COLUMNS
                    .into_iter()
                    .map(|spec| {
                        // Columns a move does not touch compare equal and stay quiet
                        let column_tasks = Memo::new(move |_| {
                            columns.with(|partition| partition.get(spec.status).to_vec())
                        });
                        view! { <KanbanColumn spec=spec tasks=column_tasks on_move=move_task /> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
