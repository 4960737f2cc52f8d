//! Recent grades table.

use leptos::prelude::*;

use crate::state::portal::PortalState;

#[component]
pub fn GradesPage() -> impl IntoView {
    let portal = expect_context::<RwSignal<PortalState>>();

    view! {
        <div class="card">
            <table class="grades-table">
                <thead>
                    <tr>
                        <th>"Subject"</th>
                        <th>"Assignment"</th>
                        <th>"Grade"</th>
                        <th>"Points"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody id="grades-list">
                    <For
                        each=move || portal.with(|p| p.grades.visible_items())
                        key=|item| item.key.clone()
                        children=|item| {
                            let row = item.view;
                            view! {
                                <tr>
                                    <td>{row.subject}</td>
                                    <td>{row.assignment}</td>
                                    <td><span class=row.grade_class>{row.grade}</span></td>
                                    <td>{row.points}</td>
                                    <td>{row.date}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
