//! Success pie chart

use super::{palette_color, PieFigure, PieSlice, FAILURE_COLOR, SUCCESS_COLOR};
use crate::analytics::{aggregate, SiteSuccess};
use crate::dataset::{Dataset, Outcome, SiteSelector};

/// Build the success pie for the selected site(s)
pub fn success_pie(dataset: &Dataset, selector: &SiteSelector) -> PieFigure {
    pie_from_success(&aggregate(dataset, selector), selector)
}

/// Turn an aggregation result into a pie figure
///
/// All sites: one slice per site sized by success rate, palette colours.
/// One site: "Success"/"Failure" slices sized by count, fixed colours.
pub fn pie_from_success(success: &SiteSuccess, selector: &SiteSelector) -> PieFigure {
    let slices = match success {
        SiteSuccess::Rates(rates) => rates
            .iter()
            .enumerate()
            .map(|(i, r)| PieSlice {
                label: r.site.clone(),
                value: r.rate,
                color: palette_color(i).to_string(),
            })
            .collect(),
        SiteSuccess::Counts(counts) => counts
            .iter()
            .map(|c| PieSlice {
                label: c.label.to_string(),
                value: c.count as f64,
                color: outcome_color(c.outcome).to_string(),
            })
            .collect(),
    };

    PieFigure {
        title: pie_title(selector),
        slices,
    }
}

fn outcome_color(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Success => SUCCESS_COLOR,
        Outcome::Failure => FAILURE_COLOR,
    }
}

fn pie_title(selector: &SiteSelector) -> String {
    match selector {
        SiteSelector::All => "Total Successful Launches for All Sites".to_string(),
        SiteSelector::Site(site) => {
            format!("Distribution of Success Launches for Site {} Site", site)
        }
    }
}
