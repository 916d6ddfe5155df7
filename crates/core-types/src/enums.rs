use crate::structs::OrderRecord;
use serde::{Deserialize, Serialize};

/// The label a caller sends when it does not want to narrow by category.
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// The category part of a dashboard filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Interprets a raw selection coming from a caller.
    ///
    /// `None`, an empty string and the "All Categories" label all mean
    /// that no category predicate is applied.
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection.map(str::trim) {
            None | Some("") => CategoryFilter::All,
            Some(label) if label == ALL_CATEGORIES_LABEL => CategoryFilter::All,
            Some(category) => CategoryFilter::Only(category.to_string()),
        }
    }

    /// Returns true if an order in `category` passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// A categorical column that orders can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    ProductCategory,
    ShippingState,
    FulfillmentType,
}

impl Dimension {
    /// Projects the grouping key of this dimension out of a record.
    pub fn key<'a>(&self, record: &'a OrderRecord) -> &'a str {
        match self {
            Dimension::ProductCategory => &record.product_category,
            Dimension::ShippingState => &record.shipping_state,
            Dimension::FulfillmentType => &record.fulfillment_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_sentinels_mean_all() {
        assert_eq!(CategoryFilter::from_selection(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_selection(Some("")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_selection(Some("All Categories")),
            CategoryFilter::All
        );
    }

    #[test]
    fn concrete_selection_matches_exactly() {
        let filter = CategoryFilter::from_selection(Some("Set"));
        assert_eq!(filter, CategoryFilter::Only("Set".to_string()));
        assert!(filter.matches("Set"));
        assert!(!filter.matches("set"));
        assert!(!filter.matches("Kurta"));
        assert!(CategoryFilter::All.matches("anything"));
    }
}
