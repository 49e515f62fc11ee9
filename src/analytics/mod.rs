//! Launch Analytics
//!
//! Pure functions over a `Dataset` that recompute chart data from the
//! current filter state. Neither function depends on the other and
//! neither has an error path: an unknown site or an inverted payload
//! range yields empty data.

pub mod aggregate;
pub mod projection;

pub use aggregate::{
    aggregate, outcome_counts, success_rates, OutcomeCount, SiteRate, SiteSuccess,
};
pub use projection::{project, LaunchPoint};
