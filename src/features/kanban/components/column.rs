use leptos::prelude::*;
use leptos::ev::DragEvent;
use crate::config::{ColumnSpec, DRAG_MIME};
use crate::domain::drag::DragPayload;
use crate::domain::log;
use crate::domain::models::{Task, TaskStatus};
use super::TaskCard;

#[component]
pub fn KanbanColumn(
    spec: ColumnSpec,
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] on_move: Callback<(String, TaskStatus)>,
) -> impl IntoView {
    let (drag_over, set_drag_over) = signal(false);
    let status = spec.status;

    // Without preventDefault the browser refuses the drop
    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(data_transfer) = ev.data_transfer() {
            data_transfer.set_drop_effect("move");
        }
        set_drag_over.set(true);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);

        let raw = ev
            .data_transfer()
            .and_then(|data_transfer| data_transfer.get_data(DRAG_MIME).ok())
            .unwrap_or_default();
        match DragPayload::decode(&raw) {
            Ok(payload) => on_move.run((payload.task_id, status)),
            Err(e) => log::warn(&format!("Ignoring drop on {}: {}", status.as_str(), e)),
        }
    };

    view! {
        <div
            class="kanban-column"
            class:drag-over=move || drag_over.get()
            on:dragover=on_drag_over
            on:dragleave=move |_| set_drag_over.set(false)
            on:drop=on_drop
        >
            <div class="column-header">
                <h3 class=spec.color.class()>{spec.title}</h3>
                <span class="task-count">{move || tasks.with(|tasks| tasks.len())}</span>
            </div>
            <div class="column-content">
                <For
                    each=move || tasks.get()
                    key=|task| task.id.clone()
                    let:task
                >
                    <TaskCard task=task />
                </For>
            </div>
        </div>
    }
}
