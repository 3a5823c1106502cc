use contracts::domain::a003_feed_log::record::{CreateFeedLogRequest, FeedLog};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::record_table::RecordTable;
use crate::shared::live::LiveData;
use crate::system::auth::api;
use crate::system::auth::context::use_auth;

#[component]
pub fn FeedPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let live = use_context::<LiveData>().expect("LiveData not found");
    let (auth_state, _) = use_auth();

    let date = RwSignal::new(String::new());
    let shed = RwSignal::new(String::new());
    let kg = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let rows = Signal::derive(move || {
        live.feed
            .get()
            .iter()
            .map(|r| vec![r.date.clone(), r.shed.clone(), r.kg.to_string()])
            .collect::<Vec<_>>()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let kg_value = match kg.get().trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                set_error.set(Some("Kg must be a number".to_string()));
                return;
            }
        };

        let req = CreateFeedLogRequest {
            date: date.get(),
            shed: shed.get(),
            kg: kg_value,
        };

        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };

        set_saving.set(true);
        spawn_local(async move {
            match api::post_json_with_auth::<_, FeedLog>("/api/feed_consumption", &token, &req)
                .await
            {
                Ok(_) => {
                    date.set(String::new());
                    shed.set(String::new());
                    kg.set(String::new());
                    ctx.show_toast("Feed record saved");
                }
                Err(e) => set_error.set(Some(format!("Save failed: {}", e))),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Feed"</h1>
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
                    <label>"Kg"</label>
                    <input
                        type="number"
                        step="any"
                        prop:value=move || kg.get()
                        on:input=move |ev| kg.set(event_target_value(&ev))
                        required
                    />
                </div>
                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save record" }}
                </button>
            </form>

            <RecordTable headers=vec!["Date", "Shed", "Kg"] rows=rows />
        </div>
    }
}
