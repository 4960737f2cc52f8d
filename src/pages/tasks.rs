//! Task list with status filters and per-task actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filter buttons drive `PortalState::apply_filter`; the active button follows
//! the coordinator's filter, so a search (which resets it) lights `All` again.
//!
//! Complete and Delete go through the simulated write endpoint and then
//! re-fetch the tasks and the dashboard. Fixtures are static, so the lists come
//! back unchanged.

use leptos::prelude::*;

use crate::components::toast_stack::Toaster;
use crate::config::PortalConfig;
use crate::net::api::{Endpoint, MockApi, PortalApi, task_action_endpoint};
use crate::state::page::TaskFilter;
use crate::state::portal::PortalState;
use crate::state::toast::Severity;
use crate::util::browser;

/// Post a task action, then re-fetch tasks and dashboard after a short pause.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn submit_task_action(portal: RwSignal<PortalState>, api: MockApi, refresh_delay_ms: u64, id: u32, action: &'static str) {
    let path = task_action_endpoint(id, action);
    leptos::task::spawn_local(async move {
        let response = api.post(&path, serde_json::json!({ "taskId": id })).await;
        leptos::logging::log!("{path}: {}", response.message);
        #[cfg(feature = "csr")]
        gloo_timers::future::sleep(std::time::Duration::from_millis(refresh_delay_ms)).await;
        let tasks = api.fetch(Endpoint::Tasks).await;
        let dashboard = api.fetch(Endpoint::Dashboard).await;
        portal.update(|p| {
            p.apply_fetched(tasks);
            p.apply_fetched(dashboard);
        });
    });
}

#[component]
pub fn TasksPage() -> impl IntoView {
    let portal = expect_context::<RwSignal<PortalState>>();
    let toaster = expect_context::<Toaster>();
    let api = expect_context::<MockApi>();
    let refresh_delay_ms = expect_context::<PortalConfig>().task_refresh_delay_ms;

    let on_complete = move |id: u32| {
        toaster.show(format!("Task {id} marked as completed"), Severity::Success);
        submit_task_action(portal, api, refresh_delay_ms, id, "complete");
    };
    let on_edit = move |id: u32| toaster.show(format!("Editing task {id}"), Severity::Info);
    let on_delete = move |id: u32| {
        if browser::confirm("Are you sure you want to delete this task?") {
            toaster.show(format!("Task {id} deleted"), Severity::Success);
            submit_task_action(portal, api, refresh_delay_ms, id, "delete");
        }
    };

    view! {
        <div class="task-filters">
            {TaskFilter::ALL
                .into_iter()
                .map(|filter| {
                    let class = move || {
                        if portal.with(|p| p.task_filter() == filter) { "filter-btn active" } else { "filter-btn" }
                    };
                    view! {
                        <button class=class data-filter=filter.as_str() on:click=move |_| portal.update(|p| p.apply_filter(filter))>
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>

        <div class="tasks-list" id="all-tasks">
            <For
                each=move || portal.with(|p| p.tasks.visible_items())
                key=|item| item.key.clone()
                children=move |item| {
                    let task = item.view;
                    let id = task.id;
                    view! {
                        <div class=task.item_class>
                            <div class="task-header">
                                <div>
                                    <div class="task-title">{task.title}</div>
                                    <div class="task-subject">{task.subject}</div>
                                </div>
                                <div>
                                    <div class="task-due">{task.due}</div>
                                    <span class=task.status_class>{task.status.as_str()}</span>
                                </div>
                            </div>
                            <div class="task-description">{task.description}</div>
                            <div class="task-actions">
                                {task
                                    .can_complete
                                    .then(|| {
                                        view! {
                                            <button class="task-btn btn-complete" on:click=move |_| on_complete(id)>
                                                "Complete"
                                            </button>
                                        }
                                    })}
                                <button class="task-btn btn-edit" on:click=move |_| on_edit(id)>
                                    "Edit"
                                </button>
                                <button class="task-btn btn-delete" on:click=move |_| on_delete(id)>
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
