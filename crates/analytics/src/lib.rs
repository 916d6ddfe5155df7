//! # Salescope Analytics Engine
//!
//! This crate turns a table of e-commerce orders into the derived views of the
//! sales dashboard: headline KPIs, a daily series with a rolling average,
//! category and state rankings, cancellation breakdowns, a state x category
//! pivot and promotion / segment comparisons.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   HTTP or terminals. It depends only on `core-types` and `configuration` (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` filters the borrowed base table
//!   on every call and returns a fresh `DashboardReport`. Nothing is cached between
//!   calls and the base table is never mutated.
//! - **Deterministic Output:** Every ranking has an explicit tie-break, so equal
//!   inputs always produce byte-identical reports.
//! - **No Partial Failure:** Empty or degenerate views produce zeroed sections or
//!   explicit "no data" markers, never errors.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The orchestrator that filters once and fans the aggregators out.
//! - `DashboardReport`: The fixed-shape bundle of every derived view.
//! - The individual aggregators (`kpis`, `daily_series`, `rank`, ...) for callers
//!   that need a single view.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod cancellation;
pub mod engine;
pub mod error;
pub mod filter;
pub mod kpi;
pub mod pivot;
pub mod promotion;
pub mod ranking;
pub mod report;
pub mod segments;
pub mod timeseries;
mod util;

// Re-export the key components to create a clean, public-facing API.
pub use cancellation::{
    cancellation_breakdown, cancellation_share, CancellationBreakdown, CancellationGroup,
    CancellationOrder, CancellationShare, CancellationShareGroup,
};
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use filter::{apply_filter, FilteredView};
pub use kpi::{kpis, Kpis};
pub use pivot::{pivot, PivotEntry, PivotTable};
pub use promotion::{promo_impact, PromotionImpact, Stats};
pub use ranking::{rank, rank_by_volume, RankedGroup};
pub use report::DashboardReport;
pub use segments::{
    business_segments, fulfillment_breakdown, monthly_top_categories, BusinessSegments,
    FulfillmentShare, MonthlyCategoryOrders,
};
pub use timeseries::{daily_series, DailyPoint};
