//! Bundled demo dataset: a deterministic month of sales activity plus the
//! side-panel fixtures.

use chrono::NaiveDate;
use contracts::dashboards::sales_overview::{
    ActivityEntry, CategorySlice, DailyRecord, LocationShare, ProductRanking, SalesDataset,
    SalesSeries,
};

/// First day covered by [`DAILY_FIGURES`].
const SERIES_START: (i32, u32, u32) = (2026, 7, 27);

/// (sales, orders, customers) per day, oldest first. Weekends peak.
const DAILY_FIGURES: [(f64, u32, u32); 30] = [
    (7420.0, 82, 34),
    (6890.0, 75, 29),
    (8150.0, 91, 38),
    (9340.0, 102, 41),
    (10120.0, 110, 46),
    (11830.0, 123, 52),
    (10940.0, 115, 48),
    (7630.0, 84, 31),
    (8270.0, 95, 37),
    (7980.0, 88, 35),
    (9460.0, 101, 43),
    (10580.0, 112, 47),
    (12740.0, 131, 55),
    (11920.0, 126, 50),
    (8440.0, 92, 36),
    (9110.0, 99, 40),
    (8690.0, 93, 38),
    (9870.0, 107, 44),
    (11240.0, 119, 49),
    (13610.0, 138, 59),
    (12380.0, 129, 54),
    (9050.0, 97, 39),
    (9720.0, 104, 42),
    (10310.0, 109, 45),
    (11060.0, 117, 48),
    (12190.0, 127, 53),
    (14260.0, 143, 62),
    (13480.0, 136, 58),
    (10870.0, 114, 47),
    (11540.0, 121, 51),
];

pub fn sales_dataset() -> SalesDataset {
    SalesDataset {
        series: sales_series(),
        categories: categories(),
        products: products(),
        activities: activities(),
        locations: locations(),
    }
}

fn sales_series() -> SalesSeries {
    let (y, m, d) = SERIES_START;
    let start = NaiveDate::from_ymd_opt(y, m, d).expect("valid series start date");
    let records = DAILY_FIGURES
        .iter()
        .enumerate()
        .map(|(i, &(sales, orders, customers))| {
            DailyRecord::new(
                start + chrono::Duration::days(i as i64),
                sales,
                orders,
                customers,
            )
        })
        .collect();
    SalesSeries::new(records)
}

fn categories() -> Vec<CategorySlice> {
    [
        ("Electronics", 35.0),
        ("Clothing", 25.0),
        ("Books", 20.0),
        ("Home & Garden", 15.0),
        ("Sports", 5.0),
    ]
    .into_iter()
    .map(|(name, value)| CategorySlice {
        name: name.to_string(),
        value,
    })
    .collect()
}

fn products() -> Vec<ProductRanking> {
    [
        ("Wireless Headphones", 12500.0, 12.5),
        ("Smart Watch", 9800.0, 8.2),
        ("Laptop", 8500.0, 5.7),
        ("Tablet", 7200.0, 3.1),
        ("Camera", 6500.0, 2.8),
    ]
    .into_iter()
    .map(|(name, sales, growth)| ProductRanking {
        name: name.to_string(),
        sales,
        growth,
    })
    .collect()
}

fn activities() -> Vec<ActivityEntry> {
    [
        (1, "New Order #1234", "$435.50", "2 hours ago"),
        (2, "Payment Received", "$1,200.00", "5 hours ago"),
        (3, "New Customer", "John Smith", "Yesterday"),
        (4, "Product Shipped", "Order #1123", "Yesterday"),
    ]
    .into_iter()
    .map(|(id, title, value, date)| ActivityEntry {
        id,
        title: title.to_string(),
        value: value.to_string(),
        date: date.to_string(),
    })
    .collect()
}

fn locations() -> Vec<LocationShare> {
    [
        (1, "New York", "32%", "+5%"),
        (2, "Los Angeles", "21%", "+2%"),
        (3, "Chicago", "15%", "+1.5%"),
        (4, "Houston", "11%", "+3%"),
    ]
    .into_iter()
    .map(|(id, title, value, growth)| LocationShare {
        id,
        title: title.to_string(),
        value: value.to_string(),
        growth: growth.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_covers_thirty_consecutive_days() {
        let series = sales_series();
        assert_eq!(series.len(), 30);

        let records = series.records();
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2026, 7, 27).unwrap());
        assert_eq!(
            records[29].date,
            NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
        );
        for pair in records.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_daily_figures_stay_in_expected_bands() {
        for record in sales_series().records() {
            assert!(record.sales >= 5000.0 && record.sales < 15000.0);
            assert!(record.orders >= 50 && record.orders < 150);
            assert!(record.customers >= 20 && record.customers < 70);
        }
    }

    #[test]
    fn test_summary_of_bundled_series() {
        let stats = sales_series().summary();
        assert_eq!(stats.total_sales, 309090.0);
        assert_eq!(stats.total_orders, 3280);
        assert_eq!(stats.total_customers, 1351);
        // 309090 / 3280 = 94.23 -> 94
        assert_eq!(stats.average_order_value, 94);
    }

    #[test]
    fn test_category_shares_sum_to_hundred() {
        let total: f64 = categories().iter().map(|c| c.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_side_panel_fixtures() {
        let dataset = sales_dataset();
        assert_eq!(dataset.products.len(), 5);
        assert_eq!(dataset.activities.len(), 4);
        assert_eq!(dataset.locations.len(), 4);
        assert!(dataset
            .locations
            .iter()
            .all(|location| location.growth.starts_with('+')));
    }
}
