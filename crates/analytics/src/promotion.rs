use crate::util::mean;
use core_types::OrderRecord;
use rust_decimal::Decimal;
use serde::Serialize;

/// Revenue, order count and average order value of one partition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    pub total_revenue: Decimal,
    pub avg_order_value: Decimal,
    pub order_count: usize,
}

impl Stats {
    /// Aggregates a partition; an empty one yields all zeros.
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a OrderRecord>) -> Self {
        let (total_revenue, order_count) = orders
            .into_iter()
            .fold((Decimal::ZERO, 0usize), |(revenue, count), r| (revenue + r.amount(), count + 1));
        Self {
            total_revenue,
            avg_order_value: mean(total_revenue, order_count),
            order_count,
        }
    }
}

/// Orders with a promotion attached compared to orders without one.
/// Both sides are always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PromotionImpact {
    pub with_promo: Stats,
    pub without_promo: Stats,
}

pub fn promo_impact(non_cancelled: &[&OrderRecord]) -> PromotionImpact {
    let (with, without): (Vec<&OrderRecord>, Vec<&OrderRecord>) =
        non_cancelled.iter().copied().partition(|r| r.has_promotion());
    PromotionImpact {
        with_promo: Stats::from_orders(with),
        without_promo: Stats::from_orders(without),
    }
}
