//! Live collection snapshots pushed by the backend.
//!
//! One EventSource per collection, opened once per session after sign-in and
//! never closed. Every message carries the complete ordered collection; the
//! handler replaces the previous snapshot wholesale, so deliveries arriving
//! in any interleaving across collections cannot corrupt each other.

use contracts::domain::a001_expense::record::Expense;
use contracts::domain::a002_egg_log::record::EggLog;
use contracts::domain::a003_feed_log::record::FeedLog;
use contracts::domain::a004_employee::record::Employee;
use contracts::domain::a005_attendance::record::Attendance;
use contracts::domain::a006_mortality_log::record::MortalityLog;
use contracts::domain::common::StoreRecord;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::shared::api_utils::api_base;

/// Current snapshot of every collection
#[derive(Clone, Copy)]
pub struct LiveData {
    pub expenses: RwSignal<Vec<Expense>>,
    pub eggs: RwSignal<Vec<EggLog>>,
    pub feed: RwSignal<Vec<FeedLog>>,
    pub employees: RwSignal<Vec<Employee>>,
    pub attendance: RwSignal<Vec<Attendance>>,
    pub mortality: RwSignal<Vec<MortalityLog>>,
}

impl LiveData {
    pub fn new() -> Self {
        Self {
            expenses: RwSignal::new(Vec::new()),
            eggs: RwSignal::new(Vec::new()),
            feed: RwSignal::new(Vec::new()),
            employees: RwSignal::new(Vec::new()),
            attendance: RwSignal::new(Vec::new()),
            mortality: RwSignal::new(Vec::new()),
        }
    }
}

impl Default for LiveData {
    fn default() -> Self {
        Self::new()
    }
}

/// Open all six subscriptions. EventSource cannot send headers, so the
/// access token rides along as a query parameter.
pub fn start_subscriptions(data: LiveData, access_token: &str) {
    subscribe_collection::<Expense>(access_token, data.expenses);
    subscribe_collection::<EggLog>(access_token, data.eggs);
    subscribe_collection::<FeedLog>(access_token, data.feed);
    subscribe_collection::<Employee>(access_token, data.employees);
    subscribe_collection::<Attendance>(access_token, data.attendance);
    subscribe_collection::<MortalityLog>(access_token, data.mortality);
}

fn subscribe_collection<T>(token: &str, target: RwSignal<Vec<T>>)
where
    T: StoreRecord + serde::de::DeserializeOwned + Send + Sync + 'static,
{
    let url = format!(
        "{}/api/{}/subscribe?token={}",
        api_base(),
        T::collection_name(),
        token
    );

    let source = match web_sys::EventSource::new(&url) {
        Ok(source) => source,
        Err(e) => {
            log::error!(
                "Failed to open {} subscription: {:?}",
                T::collection_name(),
                e
            );
            return;
        }
    };

    let on_message = Closure::wrap(Box::new(move |event: web_sys::MessageEvent| {
        let Some(text) = event.data().as_string() else {
            return;
        };
        match serde_json::from_str::<Vec<T>>(&text) {
            Ok(snapshot) => target.set(snapshot),
            Err(e) => log::error!("Bad {} snapshot: {}", T::collection_name(), e),
        }
    }) as Box<dyn FnMut(_)>);

    source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    on_message.forget();

    // The subscription lives for the whole session; there is no unsubscribe.
    std::mem::forget(source);
}
