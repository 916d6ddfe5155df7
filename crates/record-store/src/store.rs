use crate::error::StoreError;
use crate::loader::load_orders;
use chrono::NaiveDate;
use core_types::OrderRecord;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// The values a caller can narrow the dashboard by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Distinct product categories, sorted by name.
    pub categories: Vec<String>,
    /// Earliest order date in the base table, `None` for an empty table.
    pub min_date: Option<NaiveDate>,
    /// Latest order date in the base table, `None` for an empty table.
    pub max_date: Option<NaiveDate>,
}

/// The immutable base table of orders.
///
/// Built once at startup and only ever borrowed afterwards. The non-cancelled
/// view is never stored; callers derive it with `core_types::exclude_cancelled`.
#[derive(Debug, Clone)]
pub struct RecordStore {
    orders: Vec<OrderRecord>,
}

impl RecordStore {
    /// Wraps an already-typed table, enforcing that order ids are unique.
    ///
    /// A duplicate is reported at the line the row would occupy in a CSV
    /// export with a header row.
    pub fn new(orders: Vec<OrderRecord>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(orders.len());
        for (index, order) in orders.iter().enumerate() {
            if !seen.insert(order.order_id.as_str()) {
                return Err(StoreError::DuplicateOrderId {
                    line: index as u64 + 2,
                    order_id: order.order_id.clone(),
                });
            }
        }
        Ok(Self { orders })
    }

    /// Reads and validates the CSV export at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::new(load_orders(path)?)
    }

    /// Every order, in load order.
    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Distinct product categories, sorted by name.
    pub fn categories(&self) -> Vec<String> {
        self.orders
            .iter()
            .map(|o| o.product_category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// The earliest and latest order dates, or `None` when the table is empty.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.orders.iter().map(|o| o.order_date).min()?;
        let max = self.orders.iter().map(|o| o.order_date).max()?;
        Some((min, max))
    }

    pub fn filter_options(&self) -> FilterOptions {
        let bounds = self.date_bounds();
        FilterOptions {
            categories: self.categories(),
            min_date: bounds.map(|(min, _)| min),
            max_date: bounds.map(|(_, max)| max),
        }
    }
}
