//! Core data types for launch records
//!
//! - `LaunchRecord`: one historical launch
//! - `Outcome`: binary launch result
//! - `SiteSelector`: the dropdown value (all sites or one site)
//! - `PayloadRange`: the slider value (closed interval in kg)

use serde::{Deserialize, Serialize};

/// Wire value of the "all sites" sentinel
pub const ALL_SITES: &str = "ALL";

/// A single launch from the historical dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Launch site name, e.g. "CCAFS LC-40"
    pub site: String,
    /// Payload mass in kilograms, `None` when the source left it blank
    pub payload_mass_kg: Option<f64>,
    /// Landing outcome class
    pub outcome: Outcome,
    /// Booster version category, e.g. "FT"
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: impl Into<Option<f64>>,
        outcome: Outcome,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass_kg: payload_mass_kg.into(),
            outcome,
            booster_category: booster_category.into(),
        }
    }
}

/// Launch outcome class: 1 = success, 0 = failure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Map a numeric class to an outcome. Only exactly 0 and 1 are valid.
    pub fn from_class(class: f64) -> Option<Self> {
        if class == 1.0 {
            Some(Outcome::Success)
        } else if class == 0.0 {
            Some(Outcome::Failure)
        } else {
            None
        }
    }

    /// Numeric class value (1 or 0)
    pub fn class(&self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    /// Display label used in charts
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Site filter: every site, or exactly one site by name
///
/// Parsing never fails. Any value other than `"ALL"` is taken as a site
/// name, matched exactly against the dataset; an unknown name simply
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    /// Whether a record's site passes this filter
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(name) => name == site,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelector::All)
    }

    /// Wire value, the inverse of `From<&str>`
    pub fn as_str(&self) -> &str {
        match self {
            SiteSelector::All => ALL_SITES,
            SiteSelector::Site(name) => name,
        }
    }
}

impl From<&str> for SiteSelector {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(value.to_string())
        }
    }
}

impl From<String> for SiteSelector {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(value)
        }
    }
}

impl From<SiteSelector> for String {
    fn from(value: SiteSelector) -> Self {
        match value {
            SiteSelector::All => ALL_SITES.to_string(),
            SiteSelector::Site(name) => name,
        }
    }
}

impl std::fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed payload interval `[min, max]` in kilograms
///
/// `min <= max` is not enforced; an inverted range contains nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if a payload mass lies within the range (both ends inclusive)
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.min <= payload_mass_kg && payload_mass_kg <= self.max
    }

    /// Like `contains`, but a record with no payload is never inside
    pub fn contains_mass(&self, payload_mass_kg: Option<f64>) -> bool {
        payload_mass_kg.is_some_and(|mass| self.contains(mass))
    }
}
