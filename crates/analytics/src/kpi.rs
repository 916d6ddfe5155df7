use crate::util::{mean, percentage};
use core_types::OrderRecord;
use rust_decimal::Decimal;
use serde::Serialize;

/// The four headline numbers of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Kpis {
    /// Every filtered order, cancelled ones included.
    pub total_orders: usize,
    /// Sale amount of non-cancelled orders.
    pub total_revenue: Decimal,
    /// Share of filtered orders that were cancelled, in percent.
    pub cancellation_rate: Decimal,
    /// `total_revenue` per non-cancelled order.
    pub avg_order_value: Decimal,
}

/// Computes the headline metrics from a filtered view pair.
///
/// Values are left unrounded.
pub fn kpis(all: &[&OrderRecord], non_cancelled: &[&OrderRecord]) -> Kpis {
    let total_orders = all.len();
    let cancelled = all.iter().filter(|r| r.is_cancelled()).count();
    let total_revenue: Decimal = non_cancelled.iter().map(|r| r.amount()).sum();

    Kpis {
        total_orders,
        total_revenue,
        cancellation_rate: percentage(cancelled, total_orders),
        avg_order_value: mean(total_revenue, non_cancelled.len()),
    }
}
