use core_types::{Dimension, OrderRecord};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Aggregated totals for one value of a categorical dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedGroup {
    pub key: String,
    pub revenue: Decimal,
    pub order_count: usize,
}

/// Sums revenue and counts orders per group key.
pub(crate) fn group_totals<'a>(view: &[&'a OrderRecord], dimension: Dimension) -> Vec<RankedGroup> {
    let mut groups: BTreeMap<&'a str, (Decimal, usize)> = BTreeMap::new();
    for &record in view {
        let entry = groups.entry(dimension.key(record)).or_insert((Decimal::ZERO, 0));
        entry.0 += record.amount();
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(key, (revenue, order_count))| RankedGroup {
            key: key.to_string(),
            revenue,
            order_count,
        })
        .collect()
}

/// Revenue descending, then order count descending, then key ascending.
fn by_revenue(a: &RankedGroup, b: &RankedGroup) -> Ordering {
    b.revenue
        .cmp(&a.revenue)
        .then_with(|| b.order_count.cmp(&a.order_count))
        .then_with(|| a.key.cmp(&b.key))
}

/// Order count descending, then revenue descending, then key ascending.
fn by_volume(a: &RankedGroup, b: &RankedGroup) -> Ordering {
    b.order_count
        .cmp(&a.order_count)
        .then_with(|| b.revenue.cmp(&a.revenue))
        .then_with(|| a.key.cmp(&b.key))
}

/// Ranks the groups of `dimension` by revenue and keeps the first `top_n`.
///
/// Returns every group when there are fewer than `top_n`.
pub fn rank(view: &[&OrderRecord], dimension: Dimension, top_n: usize) -> Vec<RankedGroup> {
    let mut groups = group_totals(view, dimension);
    groups.sort_by(by_revenue);
    groups.truncate(top_n);
    groups
}

/// Ranks the groups of `dimension` by order count and keeps the first `top_n`.
pub fn rank_by_volume(view: &[&OrderRecord], dimension: Dimension, top_n: usize) -> Vec<RankedGroup> {
    let mut groups = group_totals(view, dimension);
    groups.sort_by(by_volume);
    groups.truncate(top_n);
    groups
}
