use crate::util::mean;
use chrono::NaiveDate;
use core_types::OrderRecord;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// One calendar day of activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub order_count: usize,
    pub revenue: Decimal,
    /// Mean revenue over this day and up to `window - 1` preceding points.
    pub rolling_avg_revenue: Decimal,
}

/// Buckets orders by calendar day, ascending, with a trailing revenue average.
///
/// Reads the unsplit view: cancelled orders contribute to both the count and
/// the revenue of their day. Days without orders are not synthesized, so the
/// window spans data points rather than calendar days. The first points use a
/// shorter window instead of being undefined. A `window` of zero is treated as one.
pub fn daily_series(all: &[&OrderRecord], window: usize) -> Vec<DailyPoint> {
    let window = window.max(1);

    let mut days: BTreeMap<NaiveDate, (usize, Decimal)> = BTreeMap::new();
    for record in all {
        let bucket = days.entry(record.order_date).or_insert((0, Decimal::ZERO));
        bucket.0 += 1;
        bucket.1 += record.amount();
    }

    let revenues: Vec<Decimal> = days.values().map(|(_, revenue)| *revenue).collect();

    days.into_iter()
        .enumerate()
        .map(|(i, (date, (order_count, revenue)))| {
            let start = (i + 1).saturating_sub(window);
            let trailing = &revenues[start..=i];
            DailyPoint {
                date,
                order_count,
                revenue,
                rolling_avg_revenue: mean(trailing.iter().sum(), trailing.len()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn order(id: usize, day: u32, status: &str, amount: Decimal) -> OrderRecord {
        OrderRecord {
            order_id: id.to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            order_status: status.to_string(),
            sale_amount: Some(amount),
            product_category: "Set".to_string(),
            fulfillment_type: "Amazon".to_string(),
            shipping_state: "GOA".to_string(),
            business_to_business: false,
            promotion_ids: None,
        }
    }

    #[test]
    fn empty_input_gives_empty_series() {
        assert!(daily_series(&[], 7).is_empty());
    }

    #[test]
    fn groups_by_day_in_ascending_order_without_gap_filling() {
        let base = vec![
            order(1, 5, "Shipped", dec!(10)),
            order(2, 1, "Shipped", dec!(20)),
            order(3, 5, "Shipped", dec!(30)),
        ];
        let view: Vec<&OrderRecord> = base.iter().collect();
        let series = daily_series(&view, 7);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(series[0].order_count, 1);
        assert_eq!(series[1].order_count, 2);
        assert_eq!(series[1].revenue, dec!(40));
    }

    #[test]
    fn cancelled_orders_still_count_toward_daily_revenue() {
        let base = vec![order(1, 1, "Cancelled", dec!(100)), order(2, 1, "Shipped", dec!(50))];
        let view: Vec<&OrderRecord> = base.iter().collect();
        let series = daily_series(&view, 7);
        assert_eq!(series[0].order_count, 2);
        assert_eq!(series[0].revenue, dec!(150));
    }

    #[test]
    fn rolling_average_uses_shorter_window_at_the_start() {
        let base: Vec<OrderRecord> = (1..=9)
            .map(|day| order(day as usize, day, "Shipped", Decimal::from(day * 10)))
            .collect();
        let view: Vec<&OrderRecord> = base.iter().collect();
        let series = daily_series(&view, 7);

        assert_eq!(series[0].rolling_avg_revenue, series[0].revenue);
        // mean(10, 20, 30)
        assert_eq!(series[2].rolling_avg_revenue, dec!(20));
        // mean(10..=70)
        assert_eq!(series[6].rolling_avg_revenue, dec!(40));
        // mean(30..=90): the oldest two points dropped out of the window
        assert_eq!(series[8].rolling_avg_revenue, dec!(60));
    }

    #[test]
    fn window_of_one_is_the_revenue_itself() {
        let base = vec![order(1, 1, "Shipped", dec!(5)), order(2, 2, "Shipped", dec!(7))];
        let view: Vec<&OrderRecord> = base.iter().collect();
        let series = daily_series(&view, 0);
        assert!(series.iter().all(|p| p.rolling_avg_revenue == p.revenue));
    }
}
