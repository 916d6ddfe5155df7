use crate::ranking::rank_by_volume;
use core_types::{Dimension, OrderRecord};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// A dense state x category matrix of order counts.
///
/// `counts[row][col]` is the number of orders shipped to `states[row]` in
/// `categories[col]`. Every row has one cell per category, zero-filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PivotTable {
    /// Row labels, busiest state first.
    pub states: Vec<String>,
    /// Column labels, sorted by name.
    pub categories: Vec<String>,
    pub counts: Vec<Vec<usize>>,
}

/// One non-empty cell of a pivot, in long form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotEntry {
    pub state: String,
    pub category: String,
    pub order_count: usize,
}

impl PivotTable {
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The count for a `(state, category)` pair, zero when either label is absent.
    pub fn get(&self, state: &str, category: &str) -> usize {
        let row = self.states.iter().position(|s| s == state);
        let col = self.categories.iter().position(|c| c == category);
        match (row, col) {
            (Some(row), Some(col)) => self.counts[row][col],
            _ => 0,
        }
    }

    pub fn row_total(&self, row: usize) -> usize {
        self.counts.get(row).map(|r| r.iter().sum()).unwrap_or_default()
    }

    /// The non-zero cells, row by row, for stacked renderings.
    pub fn entries(&self) -> Vec<PivotEntry> {
        self.states
            .iter()
            .zip(&self.counts)
            .flat_map(|(state, row)| {
                self.categories
                    .iter()
                    .zip(row)
                    .filter(|(_, count)| **count > 0)
                    .map(move |(category, count)| PivotEntry {
                        state: state.clone(),
                        category: category.clone(),
                        order_count: *count,
                    })
            })
            .collect()
    }
}

/// Builds the state x category order-count matrix for the busiest states.
///
/// Rows follow the state ranking by order count; categories are the ones
/// that occur among those states' orders.
pub fn pivot(non_cancelled: &[&OrderRecord], top_n_states: usize) -> PivotTable {
    let states: Vec<String> = rank_by_volume(non_cancelled, Dimension::ShippingState, top_n_states)
        .into_iter()
        .map(|g| g.key)
        .collect();
    let row_of: HashMap<&str, usize> = states
        .iter()
        .enumerate()
        .map(|(i, s)| (s.as_str(), i))
        .collect();

    let restricted: Vec<&OrderRecord> = non_cancelled
        .iter()
        .copied()
        .filter(|r| row_of.contains_key(r.shipping_state.as_str()))
        .collect();

    let categories: Vec<String> = restricted
        .iter()
        .map(|r| r.product_category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();
    let col_of: HashMap<&str, usize> = categories
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), i))
        .collect();

    let mut counts = vec![vec![0usize; categories.len()]; states.len()];
    for record in &restricted {
        let row = row_of[record.shipping_state.as_str()];
        let col = col_of[record.product_category.as_str()];
        counts[row][col] += 1;
    }

    PivotTable { states, categories, counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(id: usize, state: &str, category: &str) -> OrderRecord {
        OrderRecord {
            order_id: id.to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            order_status: "Shipped".to_string(),
            sale_amount: None,
            product_category: category.to_string(),
            fulfillment_type: "Amazon".to_string(),
            shipping_state: state.to_string(),
            business_to_business: false,
            promotion_ids: None,
        }
    }

    fn sample() -> Vec<OrderRecord> {
        vec![
            order(1, "GOA", "Set"),
            order(2, "KERALA", "Kurta"),
            order(3, "KERALA", "Set"),
            order(4, "KERALA", "Kurta"),
            order(5, "PUNJAB", "Top"),
            order(6, "GOA", "Set"),
        ]
    }

    #[test]
    fn rows_follow_volume_ranking_and_matrix_is_rectangular() {
        let base = sample();
        let view: Vec<&OrderRecord> = base.iter().collect();
        let table = pivot(&view, 2);

        assert_eq!(table.states, vec!["KERALA", "GOA"]);
        // PUNJAB is outside the top two, so its only category disappears.
        assert_eq!(table.categories, vec!["Kurta", "Set"]);
        assert!(table.counts.iter().all(|row| row.len() == table.categories.len()));
        assert_eq!(table.counts, vec![vec![2, 1], vec![0, 2]]);
        assert_eq!(table.get("GOA", "Kurta"), 0);
        assert_eq!(table.get("PUNJAB", "Top"), 0);
    }

    #[test]
    fn row_totals_match_state_order_counts() {
        let base = sample();
        let view: Vec<&OrderRecord> = base.iter().collect();
        let table = pivot(&view, 15);
        assert_eq!(table.states.len(), 3);
        for (row, state) in table.states.iter().enumerate() {
            let expected = base.iter().filter(|r| &r.shipping_state == state).count();
            assert_eq!(table.row_total(row), expected);
        }
    }

    #[test]
    fn long_form_skips_zero_cells() {
        let base = sample();
        let view: Vec<&OrderRecord> = base.iter().collect();
        let entries = pivot(&view, 2).entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[0],
            PivotEntry { state: "KERALA".into(), category: "Kurta".into(), order_count: 2 }
        );
        assert!(entries.iter().all(|e| e.order_count > 0));
    }

    #[test]
    fn empty_view_gives_empty_table() {
        let table = pivot(&[], 15);
        assert!(table.is_empty());
        assert!(table.categories.is_empty());
        assert!(table.entries().is_empty());
    }
}
