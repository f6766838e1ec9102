use leptos::prelude::*;
use crate::domain::services::load_bundled_tasks;
use crate::features::kanban::KanbanBoard;

#[component]
pub fn App() -> impl IntoView {
    let initial_tasks = load_bundled_tasks();

    view! {
        <main class="app">
            <KanbanBoard initial_tasks=initial_tasks />
        </main>
    }
}
