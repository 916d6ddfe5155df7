use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The status value that marks an order as cancelled. Every other status
/// (shipped, delivered, pending, ...) counts as not cancelled.
pub const CANCELLED_STATUS: &str = "Cancelled";

/// A single e-commerce order, as produced by the loading layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub order_date: NaiveDate,
    pub order_status: String,
    /// `None` when the source had no usable amount. Aggregators read it
    /// through [`OrderRecord::amount`], which maps absence to zero.
    pub sale_amount: Option<Decimal>,
    pub product_category: String,
    pub fulfillment_type: String,
    pub shipping_state: String,
    pub business_to_business: bool,
    pub promotion_ids: Option<String>,
}

impl OrderRecord {
    pub fn is_cancelled(&self) -> bool {
        self.order_status == CANCELLED_STATUS
    }

    /// The sale amount with a missing value counted as zero.
    pub fn amount(&self) -> Decimal {
        self.sale_amount.unwrap_or(Decimal::ZERO)
    }

    /// True when any non-blank promotion identifier is attached.
    /// The identifier itself is never interpreted.
    pub fn has_promotion(&self) -> bool {
        self.promotion_ids
            .as_deref()
            .is_some_and(|ids| !ids.trim().is_empty())
    }
}

/// Restricts a set of orders to those that were not cancelled.
///
/// This is the only place the non-cancelled view is derived; both the
/// record store and the request filter go through it.
pub fn exclude_cancelled<'a, I>(records: I) -> Vec<&'a OrderRecord>
where
    I: IntoIterator<Item = &'a OrderRecord>,
{
    records.into_iter().filter(|r| !r.is_cancelled()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn order(id: &str, status: &str, amount: Option<Decimal>, promo: Option<&str>) -> OrderRecord {
        OrderRecord {
            order_id: id.to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            order_status: status.to_string(),
            sale_amount: amount,
            product_category: "Set".to_string(),
            fulfillment_type: "Amazon".to_string(),
            shipping_state: "KERALA".to_string(),
            business_to_business: false,
            promotion_ids: promo.map(str::to_string),
        }
    }

    #[test]
    fn missing_amount_reads_as_zero() {
        assert_eq!(order("1", "Shipped", None, None).amount(), Decimal::ZERO);
        assert_eq!(order("2", "Shipped", Some(dec!(12.5)), None).amount(), dec!(12.5));
    }

    #[test]
    fn blank_promotion_is_not_a_promotion() {
        assert!(!order("1", "Shipped", None, None).has_promotion());
        assert!(!order("2", "Shipped", None, Some("  ")).has_promotion());
        assert!(order("3", "Shipped", None, Some("IN Core Free Shipping")).has_promotion());
    }

    #[test]
    fn only_exact_cancelled_status_is_excluded() {
        let records = vec![
            order("1", "Cancelled", Some(dec!(10)), None),
            order("2", "Shipped - Delivered to Buyer", Some(dec!(20)), None),
            order("3", "Pending", Some(dec!(30)), None),
        ];
        let kept = exclude_cancelled(&records);
        let ids: Vec<_> = kept.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }
}
