//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::config::ApiConfig;
use crate::dashboard::{dashboard_layout, render_page, Layout};
use crate::dataset::Dataset;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Launch records, loaded once and never modified
    pub dataset: Dataset,
    /// Dashboard layout derived from the dataset
    pub layout: Arc<Layout>,
    /// Rendered dashboard page
    pub page: Arc<str>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dataset: Dataset, config: ApiConfig) -> Self {
        let layout = dashboard_layout(&dataset);
        let page = render_page(&layout);

        Self {
            dataset,
            layout: Arc::new(layout),
            page: page.into(),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
