//! Callback Wiring
//!
//! Declares which input controls drive which charts. The page script
//! reads this table and, whenever an input changes, requests every
//! dependent output from its endpoint once.

use super::layout::{
    InputValue, PAYLOAD_SLIDER_ID, PIE_CHART_ID, SCATTER_CHART_ID, SITE_DROPDOWN_ID,
};
use serde::Serialize;
use std::collections::BTreeMap;

pub const PIE_ENDPOINT: &str = "/api/v1/charts/success-pie.svg";
pub const SCATTER_ENDPOINT: &str = "/api/v1/charts/payload-scatter.svg";

/// A component property taking part in a callback
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dependency {
    pub component_id: String,
    pub property: String,
    /// Query parameters carrying the value; a range value spreads over two
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
}

impl Dependency {
    pub fn output(component_id: &str, property: &str) -> Self {
        Self {
            component_id: component_id.to_string(),
            property: property.to_string(),
            params: Vec::new(),
        }
    }

    pub fn input(component_id: &str, property: &str, params: &[&str]) -> Self {
        Self {
            component_id: component_id.to_string(),
            property: property.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// One output recomputed from a set of inputs
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Callback {
    pub output: Dependency,
    pub inputs: Vec<Dependency>,
    /// Endpoint returning the new output content
    pub endpoint: String,
}

impl Callback {
    /// Whether a change to `component_id` should trigger this callback
    pub fn depends_on(&self, component_id: &str) -> bool {
        self.inputs.iter().any(|i| i.component_id == component_id)
    }

    /// Query string for the endpoint, built from the current input values
    ///
    /// Inputs without a value are left out.
    pub fn query(&self, values: &BTreeMap<String, InputValue>) -> String {
        let mut pairs: Vec<String> = Vec::new();
        for input in &self.inputs {
            match values.get(&input.component_id) {
                Some(InputValue::Text(value)) => {
                    if let Some(name) = input.params.first() {
                        pairs.push(format!("{}={}", name, urlencoding::encode(value)));
                    }
                }
                Some(InputValue::Range(range)) => {
                    for (name, bound) in input.params.iter().zip(range) {
                        pairs.push(format!("{}={}", name, bound));
                    }
                }
                None => {}
            }
        }
        pairs.join("&")
    }

    /// Endpoint URL including the query string
    pub fn url(&self, values: &BTreeMap<String, InputValue>) -> String {
        format!("{}?{}", self.endpoint, self.query(values))
    }
}

/// Callbacks triggered by a change to `component_id`
pub fn triggered_by<'a>(callbacks: &'a [Callback], component_id: &str) -> Vec<&'a Callback> {
    callbacks.iter().filter(|c| c.depends_on(component_id)).collect()
}

/// The dashboard's two callbacks
///
/// - pie chart ← site dropdown
/// - scatter chart ← site dropdown, payload slider
pub fn dashboard_callbacks() -> Vec<Callback> {
    vec![
        Callback {
            output: Dependency::output(PIE_CHART_ID, "figure"),
            inputs: vec![Dependency::input(SITE_DROPDOWN_ID, "value", &["site"])],
            endpoint: PIE_ENDPOINT.to_string(),
        },
        Callback {
            output: Dependency::output(SCATTER_CHART_ID, "figure"),
            inputs: vec![
                Dependency::input(SITE_DROPDOWN_ID, "value", &["site"]),
                Dependency::input(PAYLOAD_SLIDER_ID, "value", &["min", "max"]),
            ],
            endpoint: SCATTER_ENDPOINT.to_string(),
        },
    ]
}
