use contracts::domain::a004_employee::record::{CreateEmployeeRequest, Employee};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::record_table::RecordTable;
use crate::shared::live::LiveData;
use crate::system::auth::api;
use crate::system::auth::context::use_auth;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let live = use_context::<LiveData>().expect("LiveData not found");
    let (auth_state, _) = use_auth();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let rows = Signal::derive(move || {
        live.employees
            .get()
            .iter()
            .map(|r| vec![r.name.clone(), r.phone.clone(), r.role.clone()])
            .collect::<Vec<_>>()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let req = CreateEmployeeRequest {
            name: name.get(),
            phone: phone.get(),
            role: role.get(),
        };

        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };

        set_saving.set(true);
        spawn_local(async move {
            match api::post_json_with_auth::<_, Employee>("/api/employees", &token, &req).await {
                Ok(_) => {
                    name.set(String::new());
                    phone.set(String::new());
                    role.set(String::new());
                    ctx.show_toast("Employee added");
                }
                Err(e) => set_error.set(Some(format!("Save failed: {}", e))),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Employees"</h1>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <form class="record-form" on:submit=on_submit>
                <div class="form-group">
                    <label>"Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label>"Phone"</label>
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Role"</label>
                    <input
                        type="text"
                        placeholder="Keeper"
                        prop:value=move || role.get()
                        on:input=move |ev| role.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Add employee" }}
                </button>
            </form>

            <RecordTable headers=vec!["Name", "Phone", "Role"] rows=rows />
        </div>
    }
}
