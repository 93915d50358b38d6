use crate::shared::components::charts::DonutChart;
use contracts::dashboards::sales_overview::CategorySlice;
use contracts::shared::format::format_percent;
use leptos::prelude::*;

/// Category panel: donut of sales share per product category.
#[component]
pub fn CategoryChartPanel(
    /// Slices in display order
    slices: Vec<CategorySlice>,
) -> impl IntoView {
    let hover_label = Callback::new(|slice: CategorySlice| {
        format!("{}: {} of total sales", slice.name, format_percent(slice.value))
    });

    view! {
        <div class="panel category-chart">
            <h3 class="panel__title">"Sales by Category"</h3>
            <DonutChart slices=slices hover_label=hover_label />
        </div>
    }
}
