pub mod charts;
pub mod metric_select;
pub mod stat_card;
pub mod stats_list;
pub mod time_range_picker;

pub use metric_select::MetricSelect;
pub use stat_card::StatCard;
pub use stats_list::{ListEntry, StatsList};
pub use time_range_picker::TimeRangePicker;
