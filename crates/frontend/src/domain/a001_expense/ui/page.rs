use contracts::domain::a001_expense::record::{CreateExpenseRequest, Expense};
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
pub fn ExpensesPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let live = use_context::<LiveData>().expect("LiveData not found");
    let (auth_state, _) = use_auth();

    let date = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    // "Today" is re-evaluated on every snapshot, so a pass after local
    // midnight picks up the new date
    let today_total = Signal::derive(move || {
        aggregate::expenses_today_total(&live.expenses.get(), aggregate::today_local())
    });

    let rows = Signal::derive(move || {
        live.expenses
            .get()
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.category.clone(),
                    r.amount.to_string(),
                    r.notes.clone(),
                ]
            })
            .collect::<Vec<_>>()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        // Unparsable numeric input never reaches the store
        let amount_value = match amount.get().trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                set_error.set(Some("Amount must be a number".to_string()));
                return;
            }
        };

        let req = CreateExpenseRequest {
            date: date.get(),
            category: category.get(),
            amount: amount_value,
            notes: notes.get(),
        };

        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };

        set_saving.set(true);
        spawn_local(async move {
            match api::post_json_with_auth::<_, Expense>("/api/expenses", &token, &req).await {
                Ok(_) => {
                    date.set(String::new());
                    category.set(String::new());
                    amount.set(String::new());
                    notes.set(String::new());
                    ctx.show_toast("Expense added");
                }
                Err(e) => set_error.set(Some(format!("Save failed: {}", e))),
            }
            set_saving.set(false);
        });
    };

    // Point-in-time export: one fetch, not the live subscription
    let export = move |_| {
        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };
        spawn_local(async move {
            match api::fetch_with_auth::<Vec<Expense>>("/api/expenses", &token).await {
                Ok(snapshot) => {
                    if let Err(e) = export_to_csv(&snapshot, "expenses.csv") {
                        log::error!("Failed to export expenses: {}", e);
                    }
                }
                Err(e) => log::error!("Failed to fetch expenses for export: {}", e),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Expenses"</h1>
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
                    <label>"Category"</label>
                    <input
                        type="text"
                        placeholder="Feed purchase"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label>"Amount"</label>
                    <input
                        type="number"
                        step="any"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label>"Notes"</label>
                    <input
                        type="text"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Add expense" }}
                </button>
            </form>

            <RecordTable headers=vec!["Date", "Category", "Amount", "Notes"] rows=rows />
        </div>
    }
}
