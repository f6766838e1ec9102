use leptos::prelude::*;
use leptos::ev::DragEvent;
use crate::config::{column_for, DRAG_MIME};
use crate::domain::board::{format_created_at, truncate_description};
use crate::domain::drag::DragPayload;
use crate::domain::log;
use crate::domain::models::Task;

#[component]
pub fn TaskCard(#[prop(into)] task: Task) -> impl IntoView {
    // Cosmetic only; the task itself does not change while dragged
    let (dragging, set_dragging) = signal(false);

    let on_drag_start = {
        let task_id = task.id.clone();
        move |ev: DragEvent| {
            let Some(data_transfer) = ev.data_transfer() else {
                log::warn("Drag started without a data transfer");
                return;
            };
            match DragPayload::new(task_id.clone()).encode() {
                Ok(payload) => {
                    if let Err(e) = data_transfer.set_data(DRAG_MIME, &payload) {
                        log::warn(&format!("Failed to attach drag payload for task {}: {:?}", task_id, e));
                        return;
                    }
                    if let Err(e) = data_transfer.set_data("text/plain", &task_id) {
                        log::warn(&format!("Failed to attach plain-text id for task {}: {:?}", task_id, e));
                    }
                    data_transfer.set_effect_allowed("move");
                    set_dragging.set(true);
                }
                Err(e) => log::error(&e),
            }
        }
    };

    let badge = column_for(task.status);

    view! {
        <div
            class="task-card"
            class:dragging=move || dragging.get()
            draggable="true"
            on:dragstart=on_drag_start
            on:dragend=move |_| set_dragging.set(false)
        >
            <div class="task-content">
                <div class="task-title-row">
                    <h4>{task.title.clone()}</h4>
                    <span class=format!("status-badge {}", badge.color.class())>
                        {task.status.as_str()}
                    </span>
                </div>
                <p class="task-description">{truncate_description(&task.description)}</p>
            </div>
            <div class="task-meta">
                <span>
                    "Assigned to: "
                    <span class="task-assignee">{task.assigned_to.name.clone()}</span>
                </span>
                <span class="task-created">{format_created_at(&task.created_at)}</span>
            </div>
        </div>
    }
}
