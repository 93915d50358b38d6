use contracts::dashboards::sales_overview::Metric;
use leptos::prelude::*;

/// Metric picker for narrow layouts. Options mirror the summary cards,
/// including each card's formatted value.
#[component]
pub fn MetricSelect(
    /// Currently highlighted metric
    #[prop(into)]
    value: Signal<Metric>,
    /// (metric, formatted value) pairs in display order
    #[prop(into)]
    options: Signal<Vec<(Metric, String)>>,
    /// Fired with the parsed metric on every valid change
    on_change: Callback<Metric>,
) -> impl IntoView {
    view! {
        <select
            class="metric-select"
            aria-label="Select metric"
            on:change=move |ev| {
                // DOM option values are untrusted tokens; drop anything unknown.
                match event_target_value(&ev).parse::<Metric>() {
                    Ok(metric) => on_change.run(metric),
                    Err(err) => log::warn!("metric select ignored: {}", err),
                }
            }
        >
            <For
                each=move || options.get()
                key=|(metric, _)| *metric
                children=move |(metric, display)| {
                    let is_selected = move || value.get() == metric;
                    view! {
                        <option value=metric.as_str() selected=is_selected>
                            {format!("{} ({})", metric.card_label(), display)}
                        </option>
                    }
                }
            />
        </select>
    }
}
