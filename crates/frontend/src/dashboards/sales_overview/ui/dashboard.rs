use crate::shared::components::{ListEntry, MetricSelect, StatCard, StatsList};
use contracts::dashboards::sales_overview::{
    metric_series, summary_cards, DashboardSelection, Metric, SalesDataset, TimeRange,
};
use leptos::prelude::*;

use super::category_chart::CategoryChartPanel;
use super::metric_style::card_accent;
use super::top_products::TopProducts;
use super::trend_chart::TrendChartPanel;

/// Sales overview page: summary cards, trend chart, category donut and the
/// side lists. Selection state lives here; everything below derives from it.
#[component]
pub fn SalesOverviewDashboard(
    /// Injected dataset; the dashboard never mutates it
    dataset: SalesDataset,
) -> impl IntoView {
    let selection = RwSignal::new(DashboardSelection::new());

    // Totals are computed once per dataset; the cards never re-aggregate.
    let stats = dataset.series.summary();
    let series = StoredValue::new(dataset.series);

    let cards = Memo::new(move |_| summary_cards(&selection.get(), &stats));
    let points =
        Memo::new(move |_| series.with_value(|series| metric_series(&selection.get(), series)));
    let metric_options = Memo::new(move |_| {
        cards
            .get()
            .into_iter()
            .map(|card| (card.metric, card.value))
            .collect::<Vec<_>>()
    });

    let on_metric = Callback::new(move |metric: Metric| {
        selection.update(|s| s.set_metric(metric));
    });
    let on_range = Callback::new(move |range: TimeRange| {
        selection.update(|s| s.set_time_range(range));
    });

    let activities: Vec<ListEntry> = dataset
        .activities
        .into_iter()
        .map(|entry| ListEntry {
            id: entry.id,
            primary: entry.title,
            secondary: entry.value,
            meta: Some(entry.date),
            growth: None,
        })
        .collect();
    let locations: Vec<ListEntry> = dataset
        .locations
        .into_iter()
        .map(|share| ListEntry {
            id: share.id,
            primary: share.title,
            secondary: share.value,
            meta: None,
            growth: Some(share.growth),
        })
        .collect();

    view! {
        <div
            id="sales_overview--dashboard"
            class="page page--dashboard"
            data-page-category="dashboard"
        >
            <div class="page__header">
                <h2 class="page__title">"Sales Dashboard"</h2>
                <MetricSelect
                    value=Signal::derive(move || selection.get().metric())
                    options=metric_options
                    on_change=on_metric
                />
            </div>

            <div class="page__content sales-overview">
                <div class="sales-overview__cards">
                    {Metric::all()
                        .into_iter()
                        .map(|metric| {
                            let value = Signal::derive(move || {
                                cards.with(|cards| {
                                    cards
                                        .iter()
                                        .find(|card| card.metric == metric)
                                        .map(|card| card.value.clone())
                                        .unwrap_or_default()
                                })
                            });
                            let selected = Signal::derive(move || {
                                cards.with(|cards| {
                                    cards
                                        .iter()
                                        .any(|card| card.metric == metric && card.selected)
                                })
                            });
                            view! {
                                <StatCard
                                    label=metric.card_label()
                                    icon_name=metric.as_str()
                                    accent=card_accent(metric)
                                    value=value
                                    selected=selected
                                    on_select=Callback::new(move |_: ()| on_metric.run(metric))
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <div class="sales-overview__charts">
                    <TrendChartPanel
                        selection=selection
                        points=points
                        on_range_change=on_range
                    />
                    <CategoryChartPanel slices=dataset.categories />
                </div>

                <div class="sales-overview__lists">
                    <TopProducts products=dataset.products />
                    <StatsList title="Recent Activities" entries=activities />
                    <StatsList title="Top Locations" entries=locations />
                </div>
            </div>
        </div>
    }
}
