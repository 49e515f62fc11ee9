//! Data Transfer Objects
//!
//! Query parameters and response bodies for the API endpoints.

use serde::{Deserialize, Serialize};

use crate::analytics::{LaunchPoint, SiteSuccess};
use crate::dataset::{PayloadRange, SiteSelector};

// ============================================
// FILTER PARAMS
// ============================================

/// `?site=` parameter; absent means all sites
#[derive(Debug, Default, Deserialize)]
pub struct SiteParams {
    #[serde(default)]
    pub site: SiteSelector,
}

/// `?site=&min=&max=` parameters
///
/// Missing bounds fall back to the dataset's payload bounds.
#[derive(Debug, Default, Deserialize)]
pub struct ScatterParams {
    #[serde(default)]
    pub site: SiteSelector,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl ScatterParams {
    /// Resolve the payload window against the dataset bounds
    pub fn range(&self, bounds: Option<PayloadRange>) -> PayloadRange {
        let bounds = bounds.unwrap_or(PayloadRange::new(0.0, 0.0));
        PayloadRange::new(self.min.unwrap_or(bounds.min), self.max.unwrap_or(bounds.max))
    }
}

// ============================================
// ANALYTICS DTOs
// ============================================

/// Success aggregation response
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    /// Site selector the result was computed for
    pub site: SiteSelector,
    pub success: SiteSuccess,
}

/// Filtered launches response
#[derive(Debug, Serialize)]
pub struct LaunchesResponse {
    pub site: SiteSelector,
    pub range: PayloadRange,
    /// Number of points returned
    pub total: usize,
    pub points: Vec<LaunchPoint>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Number of launch records loaded
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
