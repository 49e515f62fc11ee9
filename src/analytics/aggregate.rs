//! Success Aggregation
//!
//! Drives the pie chart. For all sites, the mean outcome class per site
//! (its success rate). For one site, how many launches succeeded and
//! how many failed.

use crate::dataset::{Dataset, Outcome, SiteSelector};
use serde::Serialize;
use std::collections::BTreeMap;

/// Success rate of one launch site
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteRate {
    pub site: String,
    /// Mean outcome class over the site's launches, in [0, 1]
    pub rate: f64,
    /// Number of launches the rate is computed over
    pub launches: usize,
}

/// Number of launches with a given outcome
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutcomeCount {
    pub outcome: Outcome,
    /// "Success" or "Failure"
    pub label: &'static str,
    pub count: usize,
}

/// Aggregation result for a site selector
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", content = "entries", rename_all = "snake_case")]
pub enum SiteSuccess {
    /// One entry per site, ordered by site name
    Rates(Vec<SiteRate>),
    /// Outcome counts for a single site, largest first
    Counts(Vec<OutcomeCount>),
}

impl SiteSuccess {
    pub fn len(&self) -> usize {
        match self {
            SiteSuccess::Rates(rates) => rates.len(),
            SiteSuccess::Counts(counts) => counts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Aggregate launch outcomes for the selected site(s)
pub fn aggregate(dataset: &Dataset, selector: &SiteSelector) -> SiteSuccess {
    match selector {
        SiteSelector::All => SiteSuccess::Rates(success_rates(dataset)),
        SiteSelector::Site(site) => SiteSuccess::Counts(outcome_counts(dataset, site)),
    }
}

/// Mean outcome class per site, ordered by site name
pub fn success_rates(dataset: &Dataset) -> Vec<SiteRate> {
    let mut groups: BTreeMap<&str, (u64, usize)> = BTreeMap::new();

    for record in dataset.records() {
        let entry = groups.entry(record.site.as_str()).or_insert((0, 0));
        entry.0 += u64::from(record.outcome.class());
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(site, (successes, launches))| SiteRate {
            site: site.to_string(),
            rate: successes as f64 / launches as f64,
            launches,
        })
        .collect()
}

/// Success/failure counts for one site
///
/// Only outcomes that occur are listed. Ordered by count descending, ties
/// in order of first appearance. An unknown site yields an empty list.
pub fn outcome_counts(dataset: &Dataset, site: &str) -> Vec<OutcomeCount> {
    let mut counts: Vec<OutcomeCount> = Vec::with_capacity(2);

    for record in dataset.records().iter().filter(|r| r.site == site) {
        match counts.iter_mut().find(|c| c.outcome == record.outcome) {
            Some(entry) => entry.count += 1,
            None => counts.push(OutcomeCount {
                outcome: record.outcome,
                label: record.outcome.label(),
                count: 1,
            }),
        }
    }

    // Stable sort keeps first-appearance order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
