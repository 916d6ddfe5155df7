use crate::cancellation::{CancellationBreakdown, CancellationShare};
use crate::kpi::Kpis;
use crate::pivot::{PivotEntry, PivotTable};
use crate::promotion::PromotionImpact;
use crate::ranking::RankedGroup;
use crate::segments::{BusinessSegments, FulfillmentShare, MonthlyCategoryOrders};
use crate::timeseries::DailyPoint;
use core_types::FilterParams;
use serde::Serialize;

/// The complete set of derived views for one filter selection.
///
/// This struct is the final output of the `AnalyticsEngine` and the data
/// transfer object handed to every presentation layer. Its shape is fixed:
/// every section is present, degenerate inputs produce zeroed or empty
/// sections rather than missing ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    /// The filter the views were computed for.
    pub filter: FilterParams,

    // I. Headline Metrics
    pub kpis: Kpis,
    pub daily_series: Vec<DailyPoint>,

    // II. Rankings (non-cancelled orders)
    pub top_categories: Vec<RankedGroup>,
    pub top_states: Vec<RankedGroup>,
    pub fulfillment: Vec<FulfillmentShare>,

    // III. Cancellations (all filtered orders)
    pub category_cancellations: CancellationBreakdown,
    pub state_cancellations: CancellationBreakdown,
    pub state_cancellation_share: CancellationShare,

    // IV. Geography x Product (non-cancelled orders)
    pub state_category_pivot: PivotTable,
    pub state_category_entries: Vec<PivotEntry>,

    // V. Segments
    pub promotion_impact: PromotionImpact,
    pub business_segments: BusinessSegments,
    pub monthly_top_categories: Vec<MonthlyCategoryOrders>,
}
