use crate::shared::components::charts::LineChart;
use crate::shared::components::TimeRangePicker;
use contracts::dashboards::sales_overview::{
    axis_tick, tooltip_line, DashboardSelection, MetricPoint, TimeRange,
};
use leptos::prelude::*;

use super::metric_style::chart_color;

/// Trend panel: metric title, range buttons and the line chart.
#[component]
pub fn TrendChartPanel(
    /// Current selection; drives the title, color and label formatting
    #[prop(into)]
    selection: Signal<DashboardSelection>,
    /// Points for the selected metric over the selected window
    #[prop(into)]
    points: Signal<Vec<MetricPoint>>,
    /// Fired when a range button is clicked
    on_range_change: Callback<TimeRange>,
) -> impl IntoView {
    let metric = Signal::derive(move || selection.get().metric());
    let color = Signal::derive(move || chart_color(metric.get()));

    let format_tick = Callback::new(move |value: f64| axis_tick(metric.get(), value));
    let format_value = Callback::new(move |value: f64| tooltip_line(metric.get(), value));

    view! {
        <div class="panel trend-chart">
            <div class="trend-chart__header">
                <h3 class="panel__title" style=move || format!("color: {};", color.get())>
                    {move || metric.get().chart_title()}
                </h3>
                <TimeRangePicker
                    value=Signal::derive(move || selection.get().time_range())
                    on_change=on_range_change
                />
            </div>
            <LineChart
                points=points
                color=color
                format_tick=format_tick
                format_value=format_value
            />
        </div>
    }
}
