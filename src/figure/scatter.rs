//! Payload vs. outcome scatter chart

use super::{palette_color, ScatterFigure, ScatterPoint, ScatterTrace};
use crate::analytics::{project, LaunchPoint};
use crate::dataset::{Dataset, PayloadRange, SiteSelector};

pub const X_LABEL: &str = "Payload Mass (kg)";
pub const Y_LABEL: &str = "Class";

/// Build the payload scatter for the selected site(s) and payload window
pub fn payload_scatter(
    dataset: &Dataset,
    selector: &SiteSelector,
    range: PayloadRange,
) -> ScatterFigure {
    scatter_from_points(&project(dataset, selector, range), selector)
}

/// Group projected points into one trace per booster category
///
/// Traces appear in order of first appearance; each gets the next palette
/// colour. Points keep dataset order within their trace.
pub fn scatter_from_points(points: &[LaunchPoint], selector: &SiteSelector) -> ScatterFigure {
    let mut traces: Vec<ScatterTrace> = Vec::new();

    for point in points {
        let scatter_point = ScatterPoint {
            x: point.payload_mass_kg,
            y: f64::from(point.class),
        };

        match traces.iter_mut().find(|t| t.name == point.booster_category) {
            Some(trace) => trace.points.push(scatter_point),
            None => {
                let color = palette_color(traces.len()).to_string();
                traces.push(ScatterTrace {
                    name: point.booster_category.clone(),
                    color,
                    points: vec![scatter_point],
                });
            }
        }
    }

    ScatterFigure {
        title: scatter_title(selector),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        traces,
    }
}

fn scatter_title(selector: &SiteSelector) -> String {
    match selector {
        SiteSelector::All => {
            "Correlation between Payload and Launch Success at All Sites".to_string()
        }
        SiteSelector::Site(site) => {
            format!("Correlation between Payload and Launch Success at Site {}", site)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, Outcome};

    fn sample() -> Dataset {
        Dataset::new(vec![
            LaunchRecord::new("CCAFS LC-40", 525.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 2490.0, Outcome::Success, "FT"),
            LaunchRecord::new("CCAFS LC-40", 677.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, Outcome::Failure, "B4"),
        ])
    }

    #[test]
    fn test_traces_by_booster_category() {
        let range = PayloadRange::new(0.0, 10_000.0);
        let figure = payload_scatter(&sample(), &SiteSelector::All, range);

        assert_eq!(
            figure.title,
            "Correlation between Payload and Launch Success at All Sites"
        );
        assert_eq!(figure.y_label, "Class");

        let names: Vec<&str> = figure.traces.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["v1.0", "FT", "B4"]);

        let v1 = &figure.traces[0];
        assert_eq!(v1.color, "#636EFA");
        assert_eq!(
            v1.points,
            vec![ScatterPoint { x: 525.0, y: 1.0 }, ScatterPoint { x: 677.0, y: 0.0 }]
        );
        assert_eq!(figure.point_count(), 4);
    }

    #[test]
    fn test_site_title_and_filter() {
        let figure = payload_scatter(
            &sample(),
            &SiteSelector::from("KSC LC-39A"),
            PayloadRange::new(0.0, 5000.0),
        );

        assert_eq!(
            figure.title,
            "Correlation between Payload and Launch Success at Site KSC LC-39A"
        );
        assert_eq!(figure.traces.len(), 1);
        assert_eq!(figure.traces[0].name, "FT");
    }

    #[test]
    fn test_empty_scatter() {
        let range = PayloadRange::new(3000.0, 9000.0);
        let figure = payload_scatter(&sample(), &SiteSelector::All, range);
        assert!(figure.is_empty());
        assert!(figure.x_extent().is_none());
    }
}
