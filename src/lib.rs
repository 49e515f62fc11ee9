//! # Launch Dash
//!
//! An interactive dashboard over historical launch records: a site
//! dropdown and a payload range slider drive a success pie chart and a
//! payload/outcome scatter chart.
//!
//! ## Modules
//!
//! - [`dataset`]: Launch records, CSV loading, filter types
//! - [`analytics`]: Success aggregation and payload projection
//! - [`figure`]: Declarative chart figures and SVG rendering
//! - [`dashboard`]: Page layout, callback wiring, HTML page
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launch_dash::analytics::{aggregate, project};
//! use launch_dash::dataset::{load_dataset, SiteSelector};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (dataset, report) = load_dataset(Path::new("spacex_launch_dash.csv"))?;
//!     println!("Loaded {} launches ({} skipped)", dataset.len(), report.rows_skipped);
//!
//!     // Success rate per site
//!     let rates = aggregate(&dataset, &SiteSelector::All);
//!     println!("{:?}", rates);
//!
//!     // Launches at one site across the whole payload range
//!     if let Some(bounds) = dataset.payload_bounds() {
//!         let points = project(&dataset, &SiteSelector::from("KSC LC-39A"), bounds);
//!         println!("{} launches from KSC LC-39A", points.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod figure;

// Re-export top-level types for convenience
pub use dataset::{
    load_dataset, Dataset, DatasetError, DatasetLoader, LaunchRecord, LoadReport, Outcome,
    PayloadRange, SiteSelector,
};

pub use analytics::{aggregate, project, LaunchPoint, OutcomeCount, SiteRate, SiteSuccess};

pub use figure::{Figure, PieFigure, ScatterFigure};

pub use dashboard::{dashboard_layout, render_page, Layout};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DataConfig, LoggingConfig};
