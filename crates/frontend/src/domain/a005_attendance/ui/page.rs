use contracts::domain::a005_attendance::record::{Attendance, CreateAttendanceRequest};
use contracts::enums::attendance_status::AttendanceStatus;
use contracts::shared::aggregate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::record_table::RecordTable;
use crate::shared::live::LiveData;
use crate::system::auth::api;
use crate::system::auth::context::use_auth;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let live = use_context::<LiveData>().expect("LiveData not found");
    let (auth_state, _) = use_auth();

    let date = RwSignal::new(String::new());
    let employee = RwSignal::new(String::new());
    let status = RwSignal::new(AttendanceStatus::Present.code().to_string());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    // Distinct roster names in snapshot order feed the employee select
    let employee_names =
        Signal::derive(move || aggregate::employee_options(&live.employees.get()));

    let ratio =
        Signal::derive(move || aggregate::attendance_ratio(&live.attendance.get()).display());

    let rows = Signal::derive(move || {
        live.attendance
            .get()
            .iter()
            .map(|r| vec![r.date.clone(), r.employee.clone(), r.status.clone()])
            .collect::<Vec<_>>()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let req = CreateAttendanceRequest {
            date: date.get(),
            employee: employee.get(),
            status: status.get(),
        };

        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };

        set_saving.set(true);
        spawn_local(async move {
            match api::post_json_with_auth::<_, Attendance>("/api/attendance", &token, &req).await
            {
                Ok(_) => {
                    date.set(String::new());
                    employee.set(String::new());
                    status.set(AttendanceStatus::Present.code().to_string());
                    ctx.show_toast("Attendance marked");
                }
                Err(e) => set_error.set(Some(format!("Save failed: {}", e))),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Attendance"</h1>
                <div class="page__kpi">"Present: " {move || ratio.get()}</div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <form class="record-form" on:submit=on_submit>
                <div class="form-group">
                    <label>"Date"</label>
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label>"Employee"</label>
                    <select
                        prop:value=move || employee.get()
                        on:change=move |ev| employee.set(event_target_value(&ev))
                        required
                    >
                        <option value="">"Select employee"</option>
                        <For
                            each=move || employee_names.get()
                            key=|name| name.clone()
                            children=move |name| {
                                let value = name.clone();
                                view! { <option value=value>{name}</option> }
                            }
                        />
                    </select>
                </div>
                <div class="form-group">
                    <label>"Status"</label>
                    <select
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        {AttendanceStatus::all()
                            .into_iter()
                            .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Mark attendance" }}
                </button>
            </form>

            <RecordTable headers=vec!["Date", "Employee", "Status"] rows=rows />
        </div>
    }
}
