use crate::{error::AppError, AppState};
use analytics::DashboardReport;
use axum::{
    extract::{Query, State},
    Json,
};
use core_types::FilterParams;
use record_store::FilterOptions;
use serde::Deserialize;
use std::sync::Arc;

/// Raw filter inputs as the dashboard front end sends them.
///
/// Everything is optional and kept as text: a date that does not parse is
/// dropped rather than rejected, and "All Categories" disables the category filter.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category: Option<String>,
}

/// Liveness probe for load balancers and the dashboard front end.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

impl DashboardQuery {
    pub fn to_filter(&self) -> FilterParams {
        FilterParams::from_raw(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            self.category.as_deref(),
        )
    }
}

/// # GET /api/filters
/// The categories and date bounds a caller can narrow by.
pub async fn get_filters(State(state): State<Arc<AppState>>) -> Json<FilterOptions> {
    Json(state.store.filter_options())
}

/// # GET /api/dashboard
/// Recomputes every dashboard view for the requested filter.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardReport>, AppError> {
    let params = query.to_filter();
    tracing::info!(?params, "Dashboard requested.");

    let report = tokio::task::spawn_blocking(move || {
        state.engine.calculate(state.store.orders(), &params)
    })
    .await?;

    Ok(Json(report))
}
