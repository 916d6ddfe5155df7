use crate::cancellation::{cancellation_breakdown, cancellation_share, CancellationOrder};
use crate::error::AnalyticsError;
use crate::filter::{apply_filter, FilteredView};
use crate::kpi::kpis;
use crate::pivot::pivot;
use crate::promotion::promo_impact;
use crate::ranking::rank;
use crate::report::DashboardReport;
use crate::segments::{business_segments, fulfillment_breakdown, monthly_top_categories};
use crate::timeseries::daily_series;
use configuration::DashboardSettings;
use core_types::{Dimension, FilterParams, OrderRecord};

/// A stateless calculator that turns a filter selection into a `DashboardReport`.
///
/// The engine holds only its sizing settings. Every call filters the base table
/// afresh and discards the intermediate views once the report is built.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    settings: DashboardSettings,
}

impl AnalyticsEngine {
    pub fn new(settings: DashboardSettings) -> Result<Self, AnalyticsError> {
        if settings.rolling_window_days == 0 {
            return Err(AnalyticsError::InvalidSettings(
                "rolling_window_days must be at least 1".to_string(),
            ));
        }
        Ok(Self { settings })
    }

    /// The main entry point: filter once, then compute every view.
    ///
    /// # Arguments
    ///
    /// * `base` - The immutable base table.
    /// * `params` - The caller's date range and category. `FilterParams::all()`
    ///   gives the initial, unfiltered dashboard.
    #[tracing::instrument(name = "dashboard_calculate", skip(self, base), fields(orders = base.len()))]
    pub fn calculate(&self, base: &[OrderRecord], params: &FilterParams) -> DashboardReport {
        let view = apply_filter(base, params);
        tracing::debug!(
            filtered = view.all.len(),
            non_cancelled = view.non_cancelled.len(),
            "Filter applied."
        );
        self.aggregate(params.clone(), &view)
    }

    /// Runs the aggregators over an already filtered view pair.
    ///
    /// None of them reads another's output, so they are joined in parallel
    /// and only assembled at the end.
    pub fn aggregate(&self, filter: FilterParams, view: &FilteredView<'_>) -> DashboardReport {
        let s = &self.settings;
        let all = view.all.as_slice();
        let non_cancelled = view.non_cancelled.as_slice();

        let (
            ((kpis, daily_series), (top_categories, top_states)),
            (
                ((category_cancellations, state_cancellations), (state_cancellation_share, state_category_pivot)),
                ((promotion_impact, fulfillment), (business_segments, monthly_top_categories)),
            ),
        ) = rayon::join(
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || kpis(all, non_cancelled),
                            || daily_series(all, s.rolling_window_days),
                        )
                    },
                    || {
                        rayon::join(
                            || rank(non_cancelled, Dimension::ProductCategory, s.top_categories),
                            || rank(non_cancelled, Dimension::ShippingState, s.top_states),
                        )
                    },
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || {
                                rayon::join(
                                    || {
                                        cancellation_breakdown(
                                            all,
                                            Dimension::ProductCategory,
                                            s.cancellation_top_n,
                                            CancellationOrder::ByRate,
                                        )
                                    },
                                    || {
                                        cancellation_breakdown(
                                            all,
                                            Dimension::ShippingState,
                                            s.cancellation_top_n,
                                            CancellationOrder::ByVolume,
                                        )
                                    },
                                )
                            },
                            || {
                                rayon::join(
                                    || cancellation_share(all, Dimension::ShippingState, s.cancellation_top_n),
                                    || pivot(non_cancelled, s.pivot_states),
                                )
                            },
                        )
                    },
                    || {
                        rayon::join(
                            || {
                                rayon::join(
                                    || promo_impact(non_cancelled),
                                    || fulfillment_breakdown(non_cancelled),
                                )
                            },
                            || {
                                rayon::join(
                                    || business_segments(non_cancelled),
                                    || monthly_top_categories(all, s.monthly_top_categories),
                                )
                            },
                        )
                    },
                )
            },
        );

        let state_category_entries = state_category_pivot.entries();

        DashboardReport {
            filter,
            kpis,
            daily_series,
            top_categories,
            top_states,
            fulfillment,
            category_cancellations,
            state_cancellations,
            state_cancellation_share,
            state_category_pivot,
            state_category_entries,
            promotion_impact,
            business_segments,
            monthly_top_categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rolling_window_is_rejected() {
        let settings = DashboardSettings {
            rolling_window_days: 0,
            ..DashboardSettings::default()
        };
        assert!(matches!(
            AnalyticsEngine::new(settings),
            Err(AnalyticsError::InvalidSettings(_))
        ));
    }

    #[test]
    fn empty_base_table_yields_a_full_zeroed_report() {
        let engine = AnalyticsEngine::new(DashboardSettings::default()).unwrap();
        let report = engine.calculate(&[], &FilterParams::all());
        assert_eq!(report.kpis.total_orders, 0);
        assert!(report.daily_series.is_empty());
        assert!(report.top_categories.is_empty());
        assert!(!report.category_cancellations.has_cancellations());
        assert!(report.state_category_pivot.is_empty());
        assert_eq!(report.promotion_impact.with_promo.order_count, 0);
    }
}
