//! Pure view derivations: selection plus dataset in, render-ready values out.
//!
//! Every function here is a plain function of its arguments. The rendering
//! layer decides when to call them and may memoize; nothing in this module
//! caches or mutates.

use super::model::{DailyRecord, SalesSeries, SummaryStats};
use super::selection::{DashboardSelection, Metric};
use crate::shared::format::{format_count, format_currency, format_plain, format_thousands};

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// One chart point: axis label plus the raw value of the selected metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricPoint {
    pub label: String,
    pub value: f64,
}

/// One summary card, formatted and ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub metric: Metric,
    pub label: &'static str,
    pub value: String,
    pub selected: bool,
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// Records inside the selected trailing window, oldest first.
pub fn filtered_series<'a>(
    selection: &DashboardSelection,
    series: &'a SalesSeries,
) -> &'a [DailyRecord] {
    series.trailing(selection.time_range().window_len())
}

/// Chart points for the selected metric over the selected window.
pub fn metric_series(selection: &DashboardSelection, series: &SalesSeries) -> Vec<MetricPoint> {
    let metric = selection.metric();
    filtered_series(selection, series)
        .iter()
        .map(|record| MetricPoint {
            label: record.date_label(),
            value: record.metric_value(metric),
        })
        .collect()
}

/// The four summary cards in display order. Card values come from the
/// full-series totals; only the `selected` flag follows the selection.
pub fn summary_cards(selection: &DashboardSelection, stats: &SummaryStats) -> [SummaryCard; 4] {
    Metric::all().map(|metric| SummaryCard {
        metric,
        label: metric.card_label(),
        value: card_value(metric, stats),
        selected: metric == selection.metric(),
    })
}

/// Formatted headline value of one summary card.
pub fn card_value(metric: Metric, stats: &SummaryStats) -> String {
    match metric {
        Metric::Sales => format_currency(stats.total_sales),
        Metric::Orders => format_count(stats.total_orders),
        Metric::Customers => format_count(stats.total_customers),
        Metric::Average => format_currency(stats.average_order_value as f64),
    }
}

/// Y-axis tick label. Sales ticks above 999 collapse to "$12k", other
/// metrics to "12k"; the average metric always shows "$" plus the raw value.
pub fn axis_tick(metric: Metric, value: f64) -> String {
    if metric == Metric::Sales && value > 999.0 {
        format!("${}k", format_plain((value / 1000.0).floor()))
    } else if metric == Metric::Average {
        format!("${}", format_plain(value))
    } else if value > 999.0 {
        format!("{}k", format_plain((value / 1000.0).floor()))
    } else {
        format_plain(value)
    }
}

/// A single point value with grouping and the metric's currency prefix,
/// e.g. "$8,250" or "132".
pub fn point_value(metric: Metric, value: f64) -> String {
    let grouped = format_thousands(value.round() as i64);
    if metric.is_currency() {
        format!("${}", grouped)
    } else {
        grouped
    }
}

/// Tooltip body for a hovered chart point, e.g. "Sales: $8,250".
pub fn tooltip_line(metric: Metric, value: f64) -> String {
    format!("{}: {}", metric.chart_label(), point_value(metric, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::sales_overview::selection::TimeRange;
    use chrono::NaiveDate;

    /// 30 days ending 2026-08-25, sales 1000*(i+1), orders 10+i, customers 5+i.
    fn month_series() -> SalesSeries {
        let start = NaiveDate::from_ymd_opt(2026, 7, 27).unwrap();
        let records = (0..30)
            .map(|i| {
                DailyRecord::new(
                    start + chrono::Duration::days(i),
                    1000.0 * (i + 1) as f64,
                    10 + i as u32,
                    5 + i as u32,
                )
            })
            .collect();
        SalesSeries::new(records)
    }

    #[test]
    fn test_filtered_series_window_per_range() {
        let series = month_series();
        let mut selection = DashboardSelection::new();

        selection.set_time_range(TimeRange::Day);
        assert_eq!(filtered_series(&selection, &series).len(), 1);

        selection.set_time_range(TimeRange::Week);
        assert_eq!(filtered_series(&selection, &series).len(), 7);

        selection.set_time_range(TimeRange::Month);
        assert_eq!(filtered_series(&selection, &series).len(), 30);
    }

    #[test]
    fn test_filtered_series_is_most_recent_suffix() {
        let series = month_series();
        let mut selection = DashboardSelection::new();
        selection.set_time_range(TimeRange::Week);

        let window = filtered_series(&selection, &series);
        assert_eq!(window, &series.records()[23..]);
        assert_eq!(
            window.last().unwrap().date,
            NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
        );
    }

    #[test]
    fn test_filtered_series_clamps_short_series() {
        let series = SalesSeries::new(month_series().records()[..3].to_vec());
        let mut selection = DashboardSelection::new();
        selection.set_time_range(TimeRange::Week);
        assert_eq!(filtered_series(&selection, &series).len(), 3);
        assert_eq!(filtered_series(&selection, &series), series.records());
    }

    #[test]
    fn test_metric_series_pairs_labels_and_values() {
        let series = month_series();
        let mut selection = DashboardSelection::new();
        selection.set_time_range(TimeRange::Week);

        for metric in Metric::all() {
            selection.set_metric(metric);
            let points = metric_series(&selection, &series);
            let window = filtered_series(&selection, &series);
            assert_eq!(points.len(), window.len());
            for (point, record) in points.iter().zip(window) {
                assert_eq!(point.label, record.date_label());
                assert_eq!(point.value, record.metric_value(metric));
            }
        }
    }

    #[test]
    fn test_summary_cards_order_and_selection() {
        let stats = month_series().summary();
        let mut selection = DashboardSelection::new();

        let cards = summary_cards(&selection, &stats);
        assert_eq!(cards[0].label, "Total Sales");
        assert_eq!(cards[1].label, "Total Orders");
        assert_eq!(cards[2].label, "Total Customers");
        assert_eq!(cards[3].label, "Average Order Value");
        assert!(cards[0].selected);
        assert!(!cards[1].selected);

        selection.set_metric(Metric::Customers);
        let cards = summary_cards(&selection, &stats);
        assert!(!cards[0].selected);
        assert!(cards[2].selected);
    }

    #[test]
    fn test_summary_cards_ignore_time_range() {
        let stats = month_series().summary();
        let mut selection = DashboardSelection::new();

        let month_cards = summary_cards(&selection, &stats);
        selection.set_time_range(TimeRange::Day);
        let day_cards = summary_cards(&selection, &stats);

        for (a, b) in month_cards.iter().zip(day_cards.iter()) {
            assert_eq!(a.value, b.value);
        }
    }

    #[test]
    fn test_card_values_known_totals() {
        // 3 days: 1000+2000+3000 sales, 10+15+20 orders, 5+8+12 customers
        let series = SalesSeries::new(vec![
            DailyRecord::new(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(), 1000.0, 10, 5),
            DailyRecord::new(NaiveDate::from_ymd_opt(2026, 8, 2).unwrap(), 2000.0, 15, 8),
            DailyRecord::new(NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(), 3000.0, 20, 12),
        ]);
        let stats = series.summary();
        let cards = summary_cards(&DashboardSelection::new(), &stats);

        assert_eq!(cards[0].value, "$6,000");
        assert_eq!(cards[1].value, "45");
        assert_eq!(cards[2].value, "25");
        // 6000 / 45 rounds to 133
        assert_eq!(cards[3].value, "$133");
    }

    #[test]
    fn test_axis_tick_collapses_thousands() {
        assert_eq!(axis_tick(Metric::Sales, 12500.0), "$12k");
        assert_eq!(axis_tick(Metric::Orders, 12500.0), "12k");
        assert_eq!(axis_tick(Metric::Customers, 500.0), "500");
        assert_eq!(axis_tick(Metric::Sales, 999.0), "999");
        assert_eq!(axis_tick(Metric::Sales, 1000.0), "$1k");
    }

    #[test]
    fn test_axis_tick_average_is_never_collapsed() {
        assert_eq!(axis_tick(Metric::Average, 836.0), "$836");
        assert_eq!(axis_tick(Metric::Average, 12500.0), "$12500");
    }

    #[test]
    fn test_point_value_prefix_and_grouping() {
        assert_eq!(point_value(Metric::Sales, 8250.0), "$8,250");
        assert_eq!(point_value(Metric::Orders, 132.0), "132");
        assert_eq!(point_value(Metric::Average, 1557.0), "$1,557");
    }

    #[test]
    fn test_tooltip_line() {
        assert_eq!(tooltip_line(Metric::Sales, 8250.0), "Sales: $8,250");
        assert_eq!(tooltip_line(Metric::Average, 836.0), "Avg. Order Value: $836");
    }
}
