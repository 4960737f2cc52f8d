//! Dashboard page: stat cards, recent tasks, activity feed, today's schedule.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing page. Everything drawn here comes from the dashboard containers on
//! `PortalState`, which stay rendered even while another page is active so the
//! sidebar badge and stats are always current.

use leptos::prelude::*;

use crate::components::toast_stack::Toaster;
use crate::state::portal::PortalState;
use crate::state::toast::Severity;

fn stat_text(
    portal: RwSignal<PortalState>,
    pick: fn(&PortalState) -> String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || portal.with(pick)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let portal = expect_context::<RwSignal<PortalState>>();
    let toaster = expect_context::<Toaster>();

    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <div class="stat-icon"><i class="fas fa-book"></i></div>
                <div class="stat-info">
                    <h3 id="total-classes">{stat_text(portal, |p| p.stats.total_classes.clone())}</h3>
                    <p>"Total Classes"</p>
                </div>
            </div>
            <div class="stat-card">
                <div class="stat-icon"><i class="fas fa-check-circle"></i></div>
                <div class="stat-info">
                    <h3 id="completed-tasks">{stat_text(portal, |p| p.stats.completed_tasks.clone())}</h3>
                    <p>"Completed Tasks"</p>
                </div>
            </div>
            <div class="stat-card">
                <div class="progress-circle" style=stat_text(portal, |p| p.stats.attendance_style.clone())>
                    <span id="attendance-rate">{stat_text(portal, |p| p.stats.attendance.clone())}</span>
                </div>
                <div class="stat-info">
                    <p>"Attendance"</p>
                </div>
            </div>
        </div>

        <div class="dashboard-grid">
            <section class="card recent-tasks-card">
                <h2>"Recent Tasks"</h2>
                <table class="tasks-table">
                    <thead>
                        <tr>
                            <th>"Subject"</th>
                            <th>"Task"</th>
                            <th>"Due Date"</th>
                            <th>"Status"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody id="recent-tasks">
                        <For
                            each=move || portal.with(|p| p.recent_tasks.visible_items())
                            key=|item| item.key.clone()
                            children=move |item| {
                                let task = item.view;
                                let id = task.id;
                                view! {
                                    <tr>
                                        <td>{task.subject}</td>
                                        <td>{task.title}</td>
                                        <td>{task.due}</td>
                                        <td><span class=task.status_class>{task.status.as_str()}</span></td>
                                        <td>
                                            <button
                                                class="action-btn"
                                                on:click=move |_| toaster.show(format!("Viewing task {id}"), Severity::Info)
                                            >
                                                "Details"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            <section class="card">
                <h2>"Recent Updates"</h2>
                <div id="recent-updates">
                    <For
                        each=move || portal.with(|p| p.recent_updates.visible_items())
                        key=|item| item.key.clone()
                        children=|item| {
                            let update = item.view;
                            view! {
                                <div class="update-item">
                                    <div class="update-avatar">{update.avatar}</div>
                                    <div class="update-content">
                                        <div class="update-text">
                                            <strong>{update.user}</strong>
                                            " "
                                            {update.action}
                                            " "
                                            <strong>{update.subject}</strong>
                                        </div>
                                        <div class="update-time">{update.time}</div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </section>

            <section class="card">
                <h2>"Today's Schedule"</h2>
                <div id="today-schedule">
                    <For
                        each=move || portal.with(|p| p.today_schedule.visible_items())
                        key=|item| item.key.clone()
                        children=|item| {
                            let slot = item.view;
                            view! {
                                <div class="schedule-item">
                                    <div class="schedule-time">{slot.time}</div>
                                    <div class="schedule-details">
                                        <div class="schedule-subject">{slot.subject}</div>
                                        <div class="schedule-room">{slot.detail}</div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </section>
        </div>
    }
}
