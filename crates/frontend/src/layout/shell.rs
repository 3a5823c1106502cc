use leptos::prelude::*;

use crate::dashboards::d100_overview::ui::dashboard::OverviewDashboard;
use crate::domain::a001_expense::ui::page::ExpensesPage;
use crate::domain::a002_egg_log::ui::page::EggsPage;
use crate::domain::a003_feed_log::ui::page::FeedPage;
use crate::domain::a004_employee::ui::page::EmployeesPage;
use crate::domain::a005_attendance::ui::page::AttendancePage;
use crate::domain::a006_mortality_log::ui::page::MortalityPage;
use crate::layout::global_context::{AppGlobalContext, View};
use crate::layout::sidebar::Sidebar;
use crate::layout::toast::Toast;
use crate::shared::live::{start_subscriptions, LiveData};
use crate::system::auth::context::use_auth;

/// Main layout: sidebar navigation plus the current view.
///
/// Mounting the shell (which only happens once a principal exists) opens the
/// six collection subscriptions; they stay open for the whole session.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let live = LiveData::new();
    provide_context(live);

    let subscriptions_started = StoredValue::new(false);
    Effect::new(move |_| {
        if subscriptions_started.get_value() {
            return;
        }
        if let Some(token) = auth_state.get().access_token {
            subscriptions_started.set_value(true);
            start_subscriptions(live, &token);
        }
    });

    view! {
        <div class="app-shell">
            <Sidebar />
            <main class="app-shell__main">
                {move || match ctx.current_view.get() {
                    View::Dashboard => view! { <OverviewDashboard /> }.into_any(),
                    View::Expenses => view! { <ExpensesPage /> }.into_any(),
                    View::Eggs => view! { <EggsPage /> }.into_any(),
                    View::Feed => view! { <FeedPage /> }.into_any(),
                    View::Employees => view! { <EmployeesPage /> }.into_any(),
                    View::Attendance => view! { <AttendancePage /> }.into_any(),
                    View::Mortality => view! { <MortalityPage /> }.into_any(),
                }}
            </main>
            <Toast />
        </div>
    }
}
