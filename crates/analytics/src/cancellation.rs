use crate::util::percentage;
use core_types::{Dimension, OrderRecord};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Cancelled versus total orders for one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancellationGroup {
    pub key: String,
    pub cancelled_count: usize,
    pub total_count: usize,
    /// `cancelled_count / total_count * 100`.
    pub cancellation_rate: Decimal,
}

impl CancellationGroup {
    pub fn not_cancelled_count(&self) -> usize {
        self.total_count - self.cancelled_count
    }
}

/// How a cancellation breakdown is ranked before truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationOrder {
    /// Rate descending, then total count descending, then key ascending.
    ByRate,
    /// Total count descending, then rate descending, then key ascending.
    ByVolume,
}

/// Result of a cancellation breakdown.
///
/// `NoCancellations` is returned when the input holds no cancelled order at
/// all, so callers can show a "no cancellation data" state instead of a
/// ranking full of zero rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "groups", rename_all = "snake_case")]
pub enum CancellationBreakdown {
    NoCancellations,
    Ranked(Vec<CancellationGroup>),
}

impl CancellationBreakdown {
    pub fn groups(&self) -> &[CancellationGroup] {
        match self {
            CancellationBreakdown::NoCancellations => &[],
            CancellationBreakdown::Ranked(groups) => groups,
        }
    }

    pub fn has_cancellations(&self) -> bool {
        matches!(self, CancellationBreakdown::Ranked(_))
    }
}

/// Cross-tabulates `dimension` against cancelled / not cancelled.
///
/// Groups without cancellations stay in the ranking with a zero rate.
pub fn cancellation_breakdown(
    all: &[&OrderRecord],
    dimension: Dimension,
    top_n: usize,
    order: CancellationOrder,
) -> CancellationBreakdown {
    if !all.iter().any(|r| r.is_cancelled()) {
        return CancellationBreakdown::NoCancellations;
    }

    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for &record in all {
        let entry = counts.entry(dimension.key(record)).or_insert((0, 0));
        if record.is_cancelled() {
            entry.0 += 1;
        }
        entry.1 += 1;
    }

    let mut groups: Vec<CancellationGroup> = counts
        .into_iter()
        .map(|(key, (cancelled_count, total_count))| CancellationGroup {
            key: key.to_string(),
            cancelled_count,
            total_count,
            cancellation_rate: percentage(cancelled_count, total_count),
        })
        .collect();

    match order {
        CancellationOrder::ByRate => groups.sort_by(by_rate),
        CancellationOrder::ByVolume => groups.sort_by(by_volume),
    }
    groups.truncate(top_n);

    CancellationBreakdown::Ranked(groups)
}

fn by_rate(a: &CancellationGroup, b: &CancellationGroup) -> Ordering {
    b.cancellation_rate
        .cmp(&a.cancellation_rate)
        .then_with(|| b.total_count.cmp(&a.total_count))
        .then_with(|| a.key.cmp(&b.key))
}

fn by_volume(a: &CancellationGroup, b: &CancellationGroup) -> Ordering {
    b.total_count
        .cmp(&a.total_count)
        .then_with(|| b.cancellation_rate.cmp(&a.cancellation_rate))
        .then_with(|| a.key.cmp(&b.key))
}

/// A group's slice of all cancellations in the view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancellationShareGroup {
    pub key: String,
    pub cancelled_count: usize,
    /// `cancelled_count` as a percentage of every cancellation in the view.
    pub share_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "groups", rename_all = "snake_case")]
pub enum CancellationShare {
    NoCancellations,
    Ranked(Vec<CancellationShareGroup>),
}

impl CancellationShare {
    pub fn groups(&self) -> &[CancellationShareGroup] {
        match self {
            CancellationShare::NoCancellations => &[],
            CancellationShare::Ranked(groups) => groups,
        }
    }
}

/// Where the cancellations of a view come from, largest contributor first.
///
/// Ranked by cancelled count descending, then key ascending; shares are
/// computed against all cancellations before truncating to `top_n`.
pub fn cancellation_share(all: &[&OrderRecord], dimension: Dimension, top_n: usize) -> CancellationShare {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &record in all.iter().filter(|r| r.is_cancelled()) {
        *counts.entry(dimension.key(record)).or_insert(0) += 1;
    }

    let total: usize = counts.values().sum();
    if total == 0 {
        return CancellationShare::NoCancellations;
    }

    let mut groups: Vec<CancellationShareGroup> = counts
        .into_iter()
        .map(|(key, cancelled_count)| CancellationShareGroup {
            key: key.to_string(),
            cancelled_count,
            share_pct: percentage(cancelled_count, total),
        })
        .collect();
    groups.sort_by(|a, b| b.cancelled_count.cmp(&a.cancelled_count).then_with(|| a.key.cmp(&b.key)));
    groups.truncate(top_n);

    CancellationShare::Ranked(groups)
}
