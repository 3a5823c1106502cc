use contracts::shared::aggregate;
use leptos::prelude::*;

use crate::shared::components::stat_card::StatCard;
use crate::shared::components::weekly_chart::WeeklyChart;
use crate::shared::live::LiveData;

/// Farm overview dashboard (d100)
///
/// Every KPI is recomputed from the full current snapshot of its
/// collection on each delivery; nothing is accumulated incrementally.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let live = use_context::<LiveData>().expect("LiveData not found");

    let expenses_today = Signal::derive(move || {
        aggregate::expenses_today_total(&live.expenses.get(), aggregate::today_local()).to_string()
    });

    let eggs_today = Signal::derive(move || {
        aggregate::eggs_today_total(&live.eggs.get(), aggregate::today_local()).to_string()
    });

    let staff_present =
        Signal::derive(move || aggregate::attendance_ratio(&live.attendance.get()).display());

    let mortality_today = Signal::derive(move || {
        aggregate::mortality_today_total(&live.mortality.get(), aggregate::today_local())
            .to_string()
    });

    let weekly_eggs = Signal::derive(move || {
        aggregate::eggs_weekly_series(&live.eggs.get(), aggregate::today_local())
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Today's expenses".to_string()
                    icon_name="expenses".to_string()
                    value=expenses_today
                />
                <StatCard
                    label="Eggs today".to_string()
                    icon_name="eggs".to_string()
                    value=eggs_today
                />
                <StatCard
                    label="Staff present".to_string()
                    icon_name="employees".to_string()
                    value=staff_present
                />
                <StatCard
                    label="Mortality today".to_string()
                    icon_name="mortality".to_string()
                    value=mortality_today
                />
            </div>

            <h2 class="page__subtitle">"Egg collection, last 7 days"</h2>
            <WeeklyChart series=weekly_eggs />
        </div>
    }
}
