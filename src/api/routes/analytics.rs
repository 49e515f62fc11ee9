//! Analytics Routes
//!
//! Raw results of the two dashboard computations.
//!
//! - GET /api/v1/success-rates?site= - Success aggregation
//! - GET /api/v1/launches?site=&min=&max= - Filtered launches

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;

use crate::analytics::{aggregate, project};
use crate::api::dto::{LaunchesResponse, ScatterParams, SiteParams, SuccessResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/success-rates
///
/// Success rate per site for `ALL`, outcome counts for a single site.
pub async fn success_rates(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SiteParams>, QueryRejection>,
) -> ApiResult<Json<SuccessResponse>> {
    let Query(params) = params?;

    let success = aggregate(&state.dataset, &params.site);
    tracing::debug!(site = %params.site, entries = success.len(), "Computed success aggregation");

    Ok(Json(SuccessResponse {
        site: params.site,
        success,
    }))
}

/// GET /api/v1/launches
///
/// Launches within the payload window at the selected site(s).
pub async fn launches(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ScatterParams>, QueryRejection>,
) -> ApiResult<Json<LaunchesResponse>> {
    let Query(params) = params?;

    let range = params.range(state.dataset.payload_bounds());
    let points = project(&state.dataset, &params.site, range);
    tracing::debug!(
        site = %params.site,
        min = range.min,
        max = range.max,
        points = points.len(),
        "Projected launches"
    );

    Ok(Json(LaunchesResponse {
        site: params.site,
        range,
        total: points.len(),
        points,
    }))
}
