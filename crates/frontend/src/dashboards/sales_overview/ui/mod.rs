pub mod category_chart;
pub mod dashboard;
pub mod metric_style;
pub mod top_products;
pub mod trend_chart;

pub use dashboard::SalesOverviewDashboard;
