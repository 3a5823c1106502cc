use contracts::domain::a006_mortality_log::record::{CreateMortalityLogRequest, MortalityLog};
use contracts::shared::aggregate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::record_table::RecordTable;
use crate::shared::live::LiveData;
use crate::system::auth::api;
use crate::system::auth::context::use_auth;

#[component]
pub fn MortalityPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let live = use_context::<LiveData>().expect("LiveData not found");
    let (auth_state, _) = use_auth();

    let date = RwSignal::new(String::new());
    let shed = RwSignal::new(String::new());
    let count = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let today_total = Signal::derive(move || {
        aggregate::mortality_today_total(&live.mortality.get(), aggregate::today_local())
    });

    let rows = Signal::derive(move || {
        live.mortality
            .get()
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.shed.clone(),
                    r.count.to_string(),
                    r.reason.clone(),
                ]
            })
            .collect::<Vec<_>>()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let count_value = match count.get().trim().parse::<i64>() {
            Ok(v) => v,
            Err(_) => {
                set_error.set(Some("Count must be a number".to_string()));
                return;
            }
        };

        let req = CreateMortalityLogRequest {
            date: date.get(),
            shed: shed.get(),
            count: count_value,
            reason: reason.get(),
        };

        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };

        set_saving.set(true);
        spawn_local(async move {
            match api::post_json_with_auth::<_, MortalityLog>("/api/mortality", &token, &req).await
            {
                Ok(_) => {
                    date.set(String::new());
                    shed.set(String::new());
                    count.set(String::new());
                    reason.set(String::new());
                    ctx.show_toast("Mortality reported");
                }
                Err(e) => set_error.set(Some(format!("Save failed: {}", e))),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Mortality"</h1>
                <div class="page__kpi">
                    "Today: " {move || today_total.get().to_string()}
                </div>
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
                        placeholder="B"
                        prop:value=move || shed.get()
                        on:input=move |ev| shed.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label>"Count"</label>
                    <input
                        type="number"
                        prop:value=move || count.get()
                        on:input=move |ev| count.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label>"Reason"</label>
                    <input
                        type="text"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Report" }}
                </button>
            </form>

            <RecordTable headers=vec!["Date", "Shed", "Count", "Reason"] rows=rows />
        </div>
    }
}
