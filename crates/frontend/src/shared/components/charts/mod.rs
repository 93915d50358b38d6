pub mod donut_chart;
pub mod line_chart;

pub use donut_chart::DonutChart;
pub use line_chart::LineChart;
