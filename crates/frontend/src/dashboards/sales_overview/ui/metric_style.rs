use contracts::dashboards::sales_overview::Metric;

/// Card accent per metric: icon box and selected border.
pub(crate) fn card_accent(metric: Metric) -> &'static str {
    match metric {
        Metric::Sales => "#2196f3",
        Metric::Orders => "#4caf50",
        Metric::Customers => "#ff9800",
        Metric::Average => "#9c27b0",
    }
}

/// Trend line stroke per metric.
pub(crate) fn chart_color(metric: Metric) -> &'static str {
    match metric {
        Metric::Sales => "#00F5FF",
        Metric::Orders => "#7B42F6",
        Metric::Customers => "#FF7C48",
        Metric::Average => "#25D07D",
    }
}
