//! Chart Routes
//!
//! Figures for the dashboard's two graphs, as JSON specs or rendered SVG.
//!
//! - GET /api/v1/charts/success-pie?site=
//! - GET /api/v1/charts/success-pie.svg?site=
//! - GET /api/v1/charts/payload-scatter?site=&min=&max=
//! - GET /api/v1/charts/payload-scatter.svg?site=&min=&max=

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ScatterParams, SiteParams};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::figure::{payload_scatter, success_pie, svg, Figure, PieFigure, ScatterFigure};

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// GET /api/v1/charts/success-pie
pub async fn success_pie_figure(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SiteParams>, QueryRejection>,
) -> ApiResult<Json<Figure>> {
    let Query(params) = params?;
    Ok(Json(build_pie(&state, &params).into()))
}

/// GET /api/v1/charts/success-pie.svg
pub async fn success_pie_svg(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SiteParams>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(params) = params?;
    let figure = build_pie(&state, &params);
    Ok(svg_response(svg::render_pie(&figure)))
}

/// GET /api/v1/charts/payload-scatter
pub async fn payload_scatter_figure(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ScatterParams>, QueryRejection>,
) -> ApiResult<Json<Figure>> {
    let Query(params) = params?;
    Ok(Json(build_scatter(&state, &params).into()))
}

/// GET /api/v1/charts/payload-scatter.svg
pub async fn payload_scatter_svg(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ScatterParams>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(params) = params?;
    let figure = build_scatter(&state, &params);
    Ok(svg_response(svg::render_scatter(&figure)))
}

fn build_pie(state: &AppState, params: &SiteParams) -> PieFigure {
    let figure = success_pie(&state.dataset, &params.site);
    tracing::debug!(site = %params.site, slices = figure.slices.len(), "Built success pie");
    figure
}

fn build_scatter(state: &AppState, params: &ScatterParams) -> ScatterFigure {
    let range = params.range(state.dataset.payload_bounds());
    let figure = payload_scatter(&state.dataset, &params.site, range);
    tracing::debug!(
        site = %params.site,
        min = range.min,
        max = range.max,
        points = figure.point_count(),
        "Built payload scatter"
    );
    figure
}

fn svg_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], body).into_response()
}
