use contracts::dashboards::d100_overview::WeeklySeries;
use leptos::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 220.0;
const PAD: f64 = 28.0;

/// Single-series ("Eggs") line chart over the 7-day window.
///
/// The SVG is a pure function of the series: every update rebuilds it from
/// scratch and the framework drops the previous chart node before mounting
/// the new one, so no chart handle outlives its data.
#[component]
pub fn WeeklyChart(#[prop(into)] series: Signal<WeeklySeries>) -> impl IntoView {
    view! {
        <div class="weekly-chart">
            {move || {
                let series = series.get();
                let max = series.values.iter().copied().max().unwrap_or(0).max(1) as f64;
                let step = (WIDTH - 2.0 * PAD) / 6.0;

                let point_at = move |i: usize, v: i64| {
                    let x = PAD + i as f64 * step;
                    let y = HEIGHT - PAD - (v as f64 / max) * (HEIGHT - 2.0 * PAD);
                    (x, y)
                };

                let points = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        let (x, y) = point_at(i, *v);
                        format!("{:.1},{:.1}", x, y)
                    })
                    .collect::<Vec<_>>()
                    .join(" ");

                let markers = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        let (x, y) = point_at(i, *v);
                        view! {
                            <circle
                                cx=format!("{:.1}", x)
                                cy=format!("{:.1}", y)
                                r="3"
                                fill="#16a34a"
                            />
                        }
                    })
                    .collect_view();

                let labels = series
                    .labels
                    .iter()
                    .enumerate()
                    .map(|(i, label)| {
                        let x = PAD + i as f64 * step;
                        // MM-DD is enough on the axis
                        let short = label.get(5..).unwrap_or(label).to_string();
                        view! {
                            <text
                                x=format!("{:.1}", x)
                                y=format!("{:.1}", HEIGHT - 8.0)
                                text-anchor="middle"
                                class="weekly-chart__label"
                            >
                                {short}
                            </text>
                        }
                    })
                    .collect_view();

                view! {
                    <svg
                        viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                        class="weekly-chart__svg"
                        role="img"
                    >
                        <polyline
                            points=points
                            fill="none"
                            stroke="#16a34a"
                            stroke-width="2"
                        />
                        {markers}
                        {labels}
                        <text x="8" y="16" class="weekly-chart__legend">"Eggs"</text>
                    </svg>
                }
            }}
        </div>
    }
}
