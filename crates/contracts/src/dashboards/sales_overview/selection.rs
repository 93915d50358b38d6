//! Selection state for the sales overview dashboard.
//!
//! The selection is session-local UI state: it starts at its defaults on
//! every mount and is never persisted.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

/// Metrics the dashboard can highlight.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Metric {
    #[default]
    Sales,
    Orders,
    Customers,
    Average,
}

impl Metric {
    /// Stable identifier, used for DOM option values and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Sales => "sales",
            Metric::Orders => "orders",
            Metric::Customers => "customers",
            Metric::Average => "average",
        }
    }

    /// Label shown on the summary card.
    pub fn card_label(&self) -> &'static str {
        match self {
            Metric::Sales => "Total Sales",
            Metric::Orders => "Total Orders",
            Metric::Customers => "Total Customers",
            Metric::Average => "Average Order Value",
        }
    }

    /// Short label used in the trend chart tooltip.
    pub fn chart_label(&self) -> &'static str {
        match self {
            Metric::Sales => "Sales",
            Metric::Orders => "Orders",
            Metric::Customers => "Customers",
            Metric::Average => "Avg. Order Value",
        }
    }

    /// Title of the trend chart panel.
    pub fn chart_title(&self) -> &'static str {
        match self {
            Metric::Sales => "Sales Overview",
            Metric::Orders => "Orders Overview",
            Metric::Customers => "Customers Overview",
            Metric::Average => "Avg. Order Overview",
        }
    }

    /// Whether values of this metric carry a dollar prefix.
    pub fn is_currency(&self) -> bool {
        matches!(self, Metric::Sales | Metric::Average)
    }

    /// All metrics in display order.
    pub fn all() -> [Metric; 4] {
        [
            Metric::Sales,
            Metric::Orders,
            Metric::Customers,
            Metric::Average,
        ]
    }
}

impl FromStr for Metric {
    type Err = InvalidSelection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sales" => Ok(Metric::Sales),
            "orders" => Ok(Metric::Orders),
            "customers" => Ok(Metric::Customers),
            "average" => Ok(Metric::Average),
            other => Err(InvalidSelection::metric(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Time range
// ---------------------------------------------------------------------------

/// Trailing time windows the chart can be narrowed to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TimeRange {
    Day,
    Week,
    #[default]
    Month,
}

impl TimeRange {
    /// Stable identifier, used for DOM values and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
        }
    }

    /// Number of trailing records the window covers.
    pub fn window_len(&self) -> usize {
        match self {
            TimeRange::Day => 1,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
        }
    }

    /// Label on the range picker button.
    pub fn button_label(&self) -> &'static str {
        match self {
            TimeRange::Day => "24H",
            TimeRange::Week => "7D",
            TimeRange::Month => "30D",
        }
    }

    /// All ranges in display order, narrowest first.
    pub fn all() -> [TimeRange; 3] {
        [TimeRange::Day, TimeRange::Week, TimeRange::Month]
    }
}

impl FromStr for TimeRange {
    type Err = InvalidSelection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            other => Err(InvalidSelection::time_range(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// Current dashboard selection: highlighted metric plus trailing time window.
///
/// Fields are private so every change goes through the setters; derivations
/// take the selection by reference and stay pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardSelection {
    metric: Metric,
    time_range: TimeRange,
}

impl DashboardSelection {
    /// Fresh selection with the defaults: sales over the trailing month.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    /// Switches the highlighted metric. The time range is left untouched.
    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    /// Narrows or widens the chart window. The metric is left untouched.
    pub fn set_time_range(&mut self, time_range: TimeRange) {
        self.time_range = time_range;
    }
}

/// Rejected selection token from an untrusted boundary, e.g. a DOM event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSelection {
    /// Selection field the token was meant for ("metric" or "time range")
    pub field: &'static str,
    /// The rejected raw token
    pub token: String,
}

impl InvalidSelection {
    fn metric(token: &str) -> Self {
        Self {
            field: "metric",
            token: token.to_string(),
        }
    }

    fn time_range(token: &str) -> Self {
        Self {
            field: "time range",
            token: token.to_string(),
        }
    }
}

impl fmt::Display for InvalidSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} \"{}\"", self.field, self.token)
    }
}

impl std::error::Error for InvalidSelection {}
