use crate::dates::parse_date_bound;
use crate::enums::CategoryFilter;
use crate::structs::OrderRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The narrowing a caller applies to the base table.
///
/// Both date bounds are inclusive and independently optional. An inverted
/// range (`start_date > end_date`) is legal and simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: CategoryFilter,
}

impl FilterParams {
    /// A filter that keeps every record. The initial, unfiltered dashboard
    /// goes through the same pipeline with this value.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        category: CategoryFilter,
    ) -> Self {
        Self { start_date, end_date, category }
    }

    /// Builds filter parameters from raw caller strings, degrading
    /// unparsable dates to "no bound".
    pub fn from_raw(start: Option<&str>, end: Option<&str>, category: Option<&str>) -> Self {
        Self {
            start_date: parse_date_bound(start),
            end_date: parse_date_bound(end),
            category: CategoryFilter::from_selection(category),
        }
    }

    /// Returns true if the record passes both the date and category predicates.
    pub fn matches(&self, record: &OrderRecord) -> bool {
        let after_start = self.start_date.is_none_or(|start| record.order_date >= start);
        let before_end = self.end_date.is_none_or(|end| record.order_date <= end);
        after_start && before_end && self.category.matches(&record.product_category)
    }
}
