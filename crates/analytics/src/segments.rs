//! Secondary breakdowns shown next to the core dashboard views.

use crate::promotion::Stats;
use crate::ranking::{group_totals, rank, rank_by_volume};
use crate::util::share_of;
use chrono::Datelike;
use core_types::{Dimension, OrderRecord};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FulfillmentShare {
    pub key: String,
    pub revenue: Decimal,
    pub order_count: usize,
    /// Share of the view's revenue, in percent.
    pub revenue_share_pct: Decimal,
}

/// Revenue by fulfillment channel, every channel kept, largest first.
pub fn fulfillment_breakdown(non_cancelled: &[&OrderRecord]) -> Vec<FulfillmentShare> {
    let total: Decimal = non_cancelled.iter().map(|r| r.amount()).sum();
    rank(non_cancelled, Dimension::FulfillmentType, usize::MAX)
        .into_iter()
        .map(|g| FulfillmentShare {
            revenue_share_pct: share_of(g.revenue, total),
            key: g.key,
            revenue: g.revenue,
            order_count: g.order_count,
        })
        .collect()
}

/// Business-to-business orders compared to consumer orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusinessSegments {
    pub b2b: Stats,
    pub b2c: Stats,
}

pub fn business_segments(non_cancelled: &[&OrderRecord]) -> BusinessSegments {
    BusinessSegments {
        b2b: Stats::from_orders(non_cancelled.iter().copied().filter(|r| r.business_to_business)),
        b2c: Stats::from_orders(non_cancelled.iter().copied().filter(|r| !r.business_to_business)),
    }
}

/// Orders of one category in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCategoryOrders {
    pub year: i32,
    pub month: u32,
    pub category: String,
    pub order_count: usize,
}

/// Monthly order counts for the `top_k` busiest categories of the view.
///
/// Categories are picked by order count. Rows come out by month ascending,
/// then in category rank order. Months without orders for a category are omitted.
pub fn monthly_top_categories(all: &[&OrderRecord], top_k: usize) -> Vec<MonthlyCategoryOrders> {
    let leaders = rank_by_volume(all, Dimension::ProductCategory, top_k);
    let tracked: HashSet<&str> = leaders.iter().map(|g| g.key.as_str()).collect();

    let mut months: BTreeMap<(i32, u32), Vec<&OrderRecord>> = BTreeMap::new();
    for &record in all.iter().filter(|r| tracked.contains(r.product_category.as_str())) {
        let date = record.order_date;
        months.entry((date.year(), date.month())).or_default().push(record);
    }

    let mut rows = Vec::new();
    for ((year, month), orders) in months {
        let counts = group_totals(&orders, Dimension::ProductCategory);
        for leader in &leaders {
            if let Some(group) = counts.iter().find(|g| g.key == leader.key) {
                rows.push(MonthlyCategoryOrders {
                    year,
                    month,
                    category: group.key.clone(),
                    order_count: group.order_count,
                });
            }
        }
    }
    rows
}
