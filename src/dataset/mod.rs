//! Launch Dataset
//!
//! The immutable, in-memory table of launch records. Loaded once at
//! start-up and shared read-only (behind an `Arc`) by every request.
//!
//! ## Modules
//!
//! - `types`: Core types (LaunchRecord, Outcome, SiteSelector, PayloadRange)
//! - `loader`: CSV loading with per-row error reporting
//! - `error`: Error types

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{load_dataset, DatasetLoader, LoadReport};
pub use types::{LaunchRecord, Outcome, PayloadRange, SiteSelector, ALL_SITES};

use std::sync::Arc;

/// Immutable ordered collection of launch records
///
/// Cloning is cheap: records are shared.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[LaunchRecord]>,
}

impl Dataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// All records in file order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct site names in order of first appearance
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = Vec::new();
        for record in self.records.iter() {
            if !sites.contains(&record.site.as_str()) {
                sites.push(&record.site);
            }
        }
        sites
    }

    /// Smallest and largest known payload mass
    ///
    /// `None` when no record carries a payload.
    pub fn payload_bounds(&self) -> Option<PayloadRange> {
        let mut masses = self.records.iter().filter_map(|r| r.payload_mass_kg);
        let first = masses.next()?;
        let (min, max) = masses.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m)));
        Some(PayloadRange::new(min, max))
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FromIterator<LaunchRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = LaunchRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
