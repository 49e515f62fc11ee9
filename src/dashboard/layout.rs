//! Dashboard Layout
//!
//! The page as a tree of components: heading, site dropdown, pie chart,
//! payload slider and scatter chart. Served as JSON and rendered to HTML
//! by `page`.

use super::callbacks::{dashboard_callbacks, Callback};
use crate::dataset::{Dataset, ALL_SITES};
use serde::Serialize;
use std::collections::BTreeMap;

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

/// Launch sites offered by the dropdown, besides "All sites"
pub const LAUNCH_SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

pub const SLIDER_STEP: f64 = 1000.0;
pub const SLIDER_MARKS: [f64; 3] = [0.0, 5000.0, 9600.0];

/// Full page description: components plus the callbacks wiring them
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: String,
    pub components: Vec<Component>,
    pub callbacks: Vec<Callback>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum Component {
    Heading(Heading),
    Dropdown(Dropdown),
    Graph { id: String },
    Text { text: String },
    RangeSlider(RangeSlider),
    Break,
}

#[derive(Debug, Clone, Serialize)]
pub struct Heading {
    pub text: String,
    pub color: String,
    pub font_size: u32,
    pub align: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeSlider {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Initially selected [low, high]
    pub value: [f64; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Current value of an input control
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Text(String),
    Range([f64; 2]),
}

impl Layout {
    /// Find a component by id
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == Some(id))
    }

    /// Values the input controls start with, keyed by component id
    ///
    /// These seed the first request of every callback.
    pub fn initial_values(&self) -> BTreeMap<String, InputValue> {
        self.components
            .iter()
            .filter_map(|c| match c {
                Component::Dropdown(d) => Some((d.id.clone(), InputValue::Text(d.value.clone()))),
                Component::RangeSlider(s) => Some((s.id.clone(), InputValue::Range(s.value))),
                _ => None,
            })
            .collect()
    }
}

impl Component {
    pub fn id(&self) -> Option<&str> {
        match self {
            Component::Dropdown(d) => Some(d.id.as_str()),
            Component::Graph { id } => Some(id.as_str()),
            Component::RangeSlider(s) => Some(s.id.as_str()),
            Component::Heading(_) | Component::Text { .. } | Component::Break => None,
        }
    }
}

/// Site dropdown options: "All sites" first, then the fixed launch sites
pub fn site_options() -> Vec<DropdownOption> {
    std::iter::once(DropdownOption {
        label: "All sites".to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(LAUNCH_SITES.iter().map(|site| DropdownOption {
        label: site.to_string(),
        value: site.to_string(),
    }))
    .collect()
}

/// Payload slider spanning the dataset's payload bounds
///
/// An empty dataset gets a degenerate [0, 0] slider.
pub fn payload_slider(dataset: &Dataset) -> RangeSlider {
    let (min, max) = dataset
        .payload_bounds()
        .map(|b| (b.min, b.max))
        .unwrap_or((0.0, 0.0));

    RangeSlider {
        id: PAYLOAD_SLIDER_ID.to_string(),
        min,
        max,
        step: SLIDER_STEP,
        marks: SLIDER_MARKS
            .iter()
            .map(|&value| SliderMark {
                value,
                label: format!("{}", value),
            })
            .collect(),
        value: [min, max],
    }
}

/// Build the dashboard layout for a dataset
pub fn dashboard_layout(dataset: &Dataset) -> Layout {
    let components = vec![
        Component::Heading(Heading {
            text: DASHBOARD_TITLE.to_string(),
            color: "#503D36".to_string(),
            font_size: 40,
            align: "center".to_string(),
        }),
        Component::Dropdown(Dropdown {
            id: SITE_DROPDOWN_ID.to_string(),
            options: site_options(),
            value: ALL_SITES.to_string(),
            placeholder: "Select a Launch Site here".to_string(),
            searchable: true,
        }),
        Component::Break,
        Component::Graph {
            id: PIE_CHART_ID.to_string(),
        },
        Component::Break,
        Component::Text {
            text: "Payload range (kg):".to_string(),
        },
        Component::RangeSlider(payload_slider(dataset)),
        Component::Graph {
            id: SCATTER_CHART_ID.to_string(),
        },
    ];

    Layout {
        title: DASHBOARD_TITLE.to_string(),
        components,
        callbacks: dashboard_callbacks(),
    }
}
