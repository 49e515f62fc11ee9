//! Launch Dash HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Dashboard page
//! - `GET /api/v1/layout` - Layout and callback wiring
//!
//! ## Analytics
//! - `GET /api/v1/success-rates?site=` - Success aggregation
//! - `GET /api/v1/launches?site=&min=&max=` - Filtered launches
//!
//! ## Charts
//! - `GET /api/v1/charts/success-pie[.svg]?site=` - Pie figure
//! - `GET /api/v1/charts/payload-scatter[.svg]?site=&min=&max=` - Scatter figure
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use launch_dash::api::{serve, AppState};
//! use launch_dash::config::ApiConfig;
//! use launch_dash::dataset::load_dataset;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (dataset, _report) = load_dataset("spacex_launch_dash.csv".as_ref())?;
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Uri},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Dashboard routes
        .route("/layout", get(routes::dashboard::layout))
        // Analytics routes
        .route("/success-rates", get(routes::analytics::success_rates))
        .route("/launches", get(routes::analytics::launches))
        // Chart routes
        .route("/charts/success-pie", get(routes::charts::success_pie_figure))
        .route("/charts/success-pie.svg", get(routes::charts::success_pie_svg))
        .route("/charts/payload-scatter", get(routes::charts::payload_scatter_figure))
        .route("/charts/payload-scatter.svg", get(routes::charts::payload_scatter_svg));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS policy: listed origins only, or any origin when none are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Launch dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Launch dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, LaunchRecord, Outcome};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let dataset = Dataset::new(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 525.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 500.0, Outcome::Failure, "v1.1"),
            LaunchRecord::new("KSC LC-39A", 2490.0, Outcome::Success, "FT"),
            LaunchRecord::new("KSC LC-39A", 5300.0, Outcome::Success, "FT"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, Outcome::Success, "B4"),
        ]);
        build_router(AppState::new(dataset, ApiConfig::default()))
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        for uri in ["/health/live", "/health/ready"] {
            let response = send_get(create_test_app(), uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }

        let response = send_get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["records"], 6);
        assert_eq!(json["sites"], 3);
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = send_get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("SpaceX Launch Records Dashboard"));
        assert!(html.contains(r#"id="payload-slider""#));
    }

    #[tokio::test]
    async fn test_layout() {
        let response = send_get(create_test_app(), "/api/v1/layout").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["callbacks"][1]["output"]["component_id"], "success-payload-scatter-chart");
    }

    #[tokio::test]
    async fn test_success_rates_all() {
        let response = send_get(create_test_app(), "/api/v1/success-rates?site=ALL").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["site"], "ALL");
        assert_eq!(json["success"]["kind"], "rates");
        let entries = json["success"]["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["site"], "CCAFS LC-40");
        assert_eq!(entries[0]["rate"], 0.5);
    }

    #[tokio::test]
    async fn test_success_rates_single_site() {
        let response = send_get(
            create_test_app(),
            "/api/v1/success-rates?site=VAFB%20SLC-4E",
        )
        .await;
        let json = body_json(response).await;

        assert_eq!(json["success"]["kind"], "counts");
        let entries = json["success"]["entries"].as_array().unwrap();
        assert_eq!(entries[0]["label"], "Failure");
        assert_eq!(entries[1]["label"], "Success");
    }

    #[tokio::test]
    async fn test_unknown_site_is_empty_not_error() {
        let response = send_get(create_test_app(), "/api/v1/success-rates?site=Boca%20Chica").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"]["entries"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_launches_default_range_is_everything() {
        let response = send_get(create_test_app(), "/api/v1/launches").await;
        let json = body_json(response).await;

        assert_eq!(json["total"], 6);
        assert_eq!(json["range"]["min"], 0.0);
        assert_eq!(json["range"]["max"], 9600.0);
        assert_eq!(json["points"][3]["booster_category"], "FT");
    }

    #[tokio::test]
    async fn test_launches_filtered() {
        let response = send_get(
            create_test_app(),
            "/api/v1/launches?site=KSC%20LC-39A&min=0&max=5000",
        )
        .await;
        let json = body_json(response).await;

        assert_eq!(json["total"], 1);
        assert_eq!(json["points"][0]["payload_mass_kg"], 2490.0);
        assert_eq!(json["points"][0]["class"], 1);
    }

    #[tokio::test]
    async fn test_invalid_range_param() {
        let response = send_get(create_test_app(), "/api/v1/launches?min=heavy").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_pie_figure_json() {
        let response = send_get(create_test_app(), "/api/v1/charts/success-pie?site=ALL").await;
        let json = body_json(response).await;

        assert_eq!(json["type"], "pie");
        assert_eq!(json["title"], "Total Successful Launches for All Sites");
        assert_eq!(json["slices"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_pie_svg() {
        let response = send_get(
            create_test_app(),
            "/api/v1/charts/success-pie.svg?site=KSC%20LC-39A",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );

        let svg = body_text(response).await;
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Distribution of Success Launches for Site KSC LC-39A Site"));
    }

    #[tokio::test]
    async fn test_scatter_svg() {
        let response = send_get(
            create_test_app(),
            "/api/v1/charts/payload-scatter.svg?site=ALL&min=0&max=1000",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let svg = body_text(response).await;
        assert!(svg.contains("Correlation between Payload and Launch Success at All Sites"));
        assert!(svg.contains(">v1.1</text>"));
        assert!(!svg.contains(">FT</text>"));
    }

    #[tokio::test]
    async fn test_scatter_figure_json() {
        let response = send_get(
            create_test_app(),
            "/api/v1/charts/payload-scatter?site=VAFB%20SLC-4E",
        )
        .await;
        let json = body_json(response).await;

        assert_eq!(json["type"], "scatter");
        assert_eq!(json["y_label"], "Class");
        assert_eq!(json["traces"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = send_get(create_test_app(), "/api/v1/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
