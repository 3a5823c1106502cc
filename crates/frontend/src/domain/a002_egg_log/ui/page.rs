use contracts::domain::a002_egg_log::record::{CreateEggLogRequest, EggLog};
use contracts::shared::aggregate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::record_table::RecordTable;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::live::LiveData;
use crate::system::auth::api;
use crate::system::auth::context::use_auth;

#[component]
pub fn EggsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let live = use_context::<LiveData>().expect("LiveData not found");
    let (auth_state, _) = use_auth();

    let date = RwSignal::new(String::new());
    let shed = RwSignal::new(String::new());
    let collected = RwSignal::new(String::new());
    let broken = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let today_total = Signal::derive(move || {
        aggregate::eggs_today_total(&live.eggs.get(), aggregate::today_local())
    });

    let rows = Signal::derive(move || {
        live.eggs
            .get()
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.shed.clone(),
                    r.collected.to_string(),
                    r.broken.to_string(),
                ]
            })
            .collect::<Vec<_>>()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let collected_value = match collected.get().trim().parse::<i64>() {
            Ok(v) => v,
            Err(_) => {
                set_error.set(Some("Collected must be a number".to_string()));
                return;
            }
        };
        // Broken is optional and defaults to 0
        let broken_raw = broken.get();
        let broken_value = if broken_raw.trim().is_empty() {
            0
        } else {
            match broken_raw.trim().parse::<i64>() {
                Ok(v) => v,
                Err(_) => {
                    set_error.set(Some("Broken must be a number".to_string()));
                    return;
                }
            }
        };

        let req = CreateEggLogRequest {
            date: date.get(),
            shed: shed.get(),
            collected: collected_value,
            broken: broken_value,
        };

        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };

        set_saving.set(true);
        spawn_local(async move {
            match api::post_json_with_auth::<_, EggLog>("/api/eggs", &token, &req).await {
                Ok(_) => {
                    date.set(String::new());
                    shed.set(String::new());
                    collected.set(String::new());
                    broken.set(String::new());
                    ctx.show_toast("Egg record saved");
                }
                Err(e) => set_error.set(Some(format!("Save failed: {}", e))),
            }
            set_saving.set(false);
        });
    };

    let export = move |_| {
        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };
        spawn_local(async move {
            match api::fetch_with_auth::<Vec<EggLog>>("/api/eggs", &token).await {
                Ok(snapshot) => {
                    if let Err(e) = export_to_csv(&snapshot, "eggs.csv") {
                        log::error!("Failed to export egg records: {}", e);
                    }
                }
                Err(e) => log::error!("Failed to fetch egg records for export: {}", e),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Egg collection"</h1>
                <div class="page__kpi">
                    "Today: " {move || today_total.get().to_string()}
                </div>
                <button class="btn btn--secondary" on:click=export>
                    {icon("download")}
                    " CSV"
                </button>
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
                    <label>"Shed"</label>
                    <input
                        type="text"
                        placeholder="A"
                        prop:value=move || shed.get()
                        on:input=move |ev| shed.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label>"Collected"</label>
                    <input
                        type="number"
                        prop:value=move || collected.get()
                        on:input=move |ev| collected.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label>"Broken"</label>
                    <input
                        type="number"
                        prop:value=move || broken.get()
                        on:input=move |ev| broken.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save record" }}
                </button>
            </form>

            <RecordTable headers=vec!["Date", "Shed", "Collected", "Broken"] rows=rows />
        </div>
    }
}
