use core_types::{exclude_cancelled, FilterParams, OrderRecord};

/// The pair of views every aggregator reads from.
///
/// Both are borrowed from the base table, so building one never copies or
/// mutates a record.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    /// Orders that pass the date and category predicates.
    pub all: Vec<&'a OrderRecord>,
    /// `all` restricted to orders that were not cancelled.
    pub non_cancelled: Vec<&'a OrderRecord>,
}

impl FilteredView<'_> {
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Applies the caller's date range and category to the base table.
///
/// The cancellation split happens after the date/category predicates.
pub fn apply_filter<'a>(base: &'a [OrderRecord], params: &FilterParams) -> FilteredView<'a> {
    let all: Vec<&OrderRecord> = base.iter().filter(|r| params.matches(r)).collect();
    let non_cancelled = exclude_cancelled(all.iter().copied());
    FilteredView { all, non_cancelled }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::CategoryFilter;

    fn order(id: &str, day: u32, status: &str, category: &str) -> OrderRecord {
        OrderRecord {
            order_id: id.to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            order_status: status.to_string(),
            sale_amount: None,
            product_category: category.to_string(),
            fulfillment_type: "Amazon".to_string(),
            shipping_state: "GOA".to_string(),
            business_to_business: false,
            promotion_ids: None,
        }
    }

    fn base() -> Vec<OrderRecord> {
        vec![
            order("1", 1, "Shipped", "Set"),
            order("2", 2, "Cancelled", "Set"),
            order("3", 3, "Shipped", "Kurta"),
            order("4", 4, "Cancelled", "Kurta"),
        ]
    }

    #[test]
    fn no_filter_keeps_everything() {
        let base = base();
        let view = apply_filter(&base, &FilterParams::all());
        assert_eq!(view.all.len(), 4);
        assert_eq!(view.non_cancelled.len(), 2);
    }

    #[test]
    fn non_cancelled_is_a_subset_of_all() {
        let base = base();
        let params = FilterParams::new(
            NaiveDate::from_ymd_opt(2024, 1, 2),
            NaiveDate::from_ymd_opt(2024, 1, 4),
            CategoryFilter::Only("Kurta".to_string()),
        );
        let view = apply_filter(&base, &params);
        let ids: Vec<_> = view.all.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4"]);
        assert_eq!(view.non_cancelled.len(), 1);
        assert!(view.non_cancelled.iter().all(|r| view.all.contains(r)));
    }

    #[test]
    fn unknown_category_yields_empty_views() {
        let base = base();
        let params = FilterParams::new(None, None, CategoryFilter::Only("Saree".to_string()));
        let view = apply_filter(&base, &params);
        assert!(view.is_empty());
        assert!(view.non_cancelled.is_empty());
    }

    #[test]
    fn inverted_range_is_empty_not_an_error() {
        let base = base();
        let params = FilterParams::new(
            NaiveDate::from_ymd_opt(2024, 1, 4),
            NaiveDate::from_ymd_opt(2024, 1, 1),
            CategoryFilter::All,
        );
        assert!(apply_filter(&base, &params).is_empty());
    }
}
