//! Payload Projection
//!
//! Drives the scatter chart: launches inside a payload window, optionally
//! restricted to one site, reduced to (payload, class, booster category).

use crate::dataset::{Dataset, PayloadRange, SiteSelector};
use serde::Serialize;

/// One scatter point
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LaunchPoint {
    pub payload_mass_kg: f64,
    /// Outcome class, 1 = success, 0 = failure
    pub class: u8,
    pub booster_category: String,
}

/// Select launches within `range` (inclusive) at the selected site(s)
///
/// Dataset order is preserved. Launches without a payload mass are never
/// selected.
pub fn project(
    dataset: &Dataset,
    selector: &SiteSelector,
    range: PayloadRange,
) -> Vec<LaunchPoint> {
    dataset
        .records()
        .iter()
        .filter(|r| range.contains_mass(r.payload_mass_kg))
        .filter(|r| selector.matches(&r.site))
        .filter_map(|r| {
            Some(LaunchPoint {
                payload_mass_kg: r.payload_mass_kg?,
                class: r.outcome.class(),
                booster_category: r.booster_category.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, Outcome};

    fn sample() -> Dataset {
        Dataset::new(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 525.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 500.0, Outcome::Failure, "v1.1"),
            LaunchRecord::new("KSC LC-39A", 2490.0, Outcome::Success, "FT"),
            LaunchRecord::new("KSC LC-39A", 5300.0, Outcome::Success, "FT"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, Outcome::Success, "B4"),
        ])
    }

    #[test]
    fn test_full_range_all_sites_is_whole_dataset() {
        let dataset = sample();
        let bounds = dataset.payload_bounds().unwrap();

        let points = project(&dataset, &SiteSelector::All, bounds);

        assert_eq!(points.len(), dataset.len());
        for (point, record) in points.iter().zip(dataset.records()) {
            assert_eq!(Some(point.payload_mass_kg), record.payload_mass_kg);
            assert_eq!(point.class, record.outcome.class());
            assert_eq!(point.booster_category, record.booster_category);
        }
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = PayloadRange::new(500.0, 2490.0);
        let points = project(&sample(), &SiteSelector::All, range);

        let masses: Vec<f64> = points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(masses, vec![525.0, 500.0, 2490.0]);
    }

    #[test]
    fn test_site_restriction() {
        let dataset = sample();
        let range = PayloadRange::new(0.0, 10_000.0);
        let points = project(&dataset, &SiteSelector::from("VAFB SLC-4E"), range);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].class, 0);
        assert_eq!(points[1].booster_category, "B4");

        for point in &points {
            assert!(range.contains(point.payload_mass_kg));
        }
    }

    #[test]
    fn test_empty_selections() {
        let dataset = sample();

        let nowhere = SiteSelector::from("Nowhere");
        let unknown = project(&dataset, &nowhere, PayloadRange::new(0.0, 1e6));
        assert!(unknown.is_empty());

        let inverted = project(&dataset, &SiteSelector::All, PayloadRange::new(6000.0, 1000.0));
        assert!(inverted.is_empty());

        let above = PayloadRange::new(10_000.0, 20_000.0);
        let outside = project(&dataset, &SiteSelector::All, above);
        assert!(outside.is_empty());
    }

    #[test]
    fn test_missing_payload_is_never_projected() {
        let dataset = Dataset::new(vec![
            LaunchRecord::new("KSC LC-39A", 2490.0, Outcome::Success, "FT"),
            LaunchRecord::new("KSC LC-39A", None, Outcome::Failure, "FT"),
        ]);

        let points = project(&dataset, &SiteSelector::All, PayloadRange::new(f64::MIN, f64::MAX));
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].payload_mass_kg, 2490.0);
    }
}
