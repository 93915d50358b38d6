//! Data model for the sales overview dashboard.
//!
//! The dataset is an opaque input: the dashboard consumes whatever series it
//! is given and never generates or mutates records itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::selection::Metric;

// ---------------------------------------------------------------------------
// Daily records
// ---------------------------------------------------------------------------

/// One calendar day of sales activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar date of the record
    pub date: NaiveDate,
    /// Revenue for the day
    pub sales: f64,
    /// Number of orders placed
    pub orders: u32,
    /// Number of distinct customers
    pub customers: u32,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, sales: f64, orders: u32, customers: u32) -> Self {
        Self {
            date,
            sales,
            orders,
            customers,
        }
    }

    /// Average order value for the day, rounded to the nearest dollar.
    /// A day with zero orders has an average of 0.
    pub fn average(&self) -> i64 {
        if self.orders == 0 {
            return 0;
        }
        (self.sales / f64::from(self.orders)).round() as i64
    }

    /// Short axis label, e.g. "Aug 5".
    pub fn date_label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }

    /// The record's value for a given metric.
    pub fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Sales => self.sales,
            Metric::Orders => f64::from(self.orders),
            Metric::Customers => f64::from(self.customers),
            Metric::Average => self.average() as f64,
        }
    }
}

// ---------------------------------------------------------------------------
// Series and totals
// ---------------------------------------------------------------------------

/// Chronologically ordered series of daily records, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesSeries(Vec<DailyRecord>);

impl SalesSeries {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        Self(records)
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The trailing `window` records, oldest first. A window larger than the
    /// series yields the whole series.
    pub fn trailing(&self, window: usize) -> &[DailyRecord] {
        &self.0[self.0.len().saturating_sub(window)..]
    }

    /// Totals over the whole series. Not affected by any time-range filter.
    pub fn summary(&self) -> SummaryStats {
        let total_sales: f64 = self.0.iter().map(|r| r.sales).sum();
        let total_orders: u64 = self.0.iter().map(|r| u64::from(r.orders)).sum();
        let total_customers: u64 = self.0.iter().map(|r| u64::from(r.customers)).sum();
        let average_order_value = if total_orders == 0 {
            0
        } else {
            (total_sales / total_orders as f64).round() as i64
        };
        SummaryStats {
            total_sales,
            total_orders,
            total_customers,
            average_order_value,
        }
    }
}

/// Aggregated totals over a full series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Sum of daily revenue
    pub total_sales: f64,
    /// Sum of daily order counts
    pub total_orders: u64,
    /// Sum of daily customer counts
    pub total_customers: u64,
    /// total_sales / total_orders rounded to the nearest dollar, 0 when there are no orders
    pub average_order_value: i64,
}

// ---------------------------------------------------------------------------
// Secondary panels
// ---------------------------------------------------------------------------

/// Share of total sales attributed to one product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub name: String,
    /// Percent of total sales, stored as entered (e.g. 35.0 or 12.5)
    pub value: f64,
}

/// One row of the top products ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRanking {
    pub name: String,
    /// Revenue attributed to the product
    pub sales: f64,
    /// Growth percent relative to the previous period
    pub growth: f64,
}

/// Recent activity feed entry. Values are display strings supplied by the
/// data source and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: u32,
    pub title: String,
    /// e.g. "$435.50"
    pub value: String,
    /// e.g. "2 hours ago"
    pub date: String,
}

/// Sales share of one geographic location, with a pre-rendered trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationShare {
    pub id: u32,
    pub title: String,
    /// Share of sales, e.g. "32%"
    pub value: String,
    /// Signed delta, e.g. "+5%" or "-2%"
    pub growth: String,
}

/// Everything the dashboard renders, bundled as one injected input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesDataset {
    pub series: SalesSeries,
    pub categories: Vec<CategorySlice>,
    pub products: Vec<ProductRanking>,
    pub activities: Vec<ActivityEntry>,
    pub locations: Vec<LocationShare>,
}
