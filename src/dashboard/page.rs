//! Dashboard HTML page
//!
//! Renders a `Layout` into one HTML document. The layout (with its
//! callbacks) is embedded as JSON for the page script, which keeps the
//! charts in sync with the controls.

use super::layout::{Component, Dropdown, Heading, Layout, RangeSlider};
use crate::figure::svg::escape_xml;

/// Page script (embedded at compile time)
const DASHBOARD_JS: &str = include_str!("../../static/dashboard.js");

const STYLE: &str = r#"
body { font-family: 'Open Sans', verdana, arial, sans-serif; margin: 0 auto; max-width: 980px; padding: 16px; }
.dash-dropdown { display: flex; gap: 8px; }
.dash-dropdown select, .dash-dropdown input { font-size: 15px; padding: 6px; }
.dash-dropdown select { flex: 1; }
.dash-graph { min-height: 420px; }
.dash-slider { position: relative; height: 56px; }
.dash-slider input[type=range] { position: absolute; left: 0; width: 100%; pointer-events: none; background: none; }
.dash-slider input[type=range]::-webkit-slider-thumb { pointer-events: all; }
.dash-slider input[type=range]::-moz-range-thumb { pointer-events: all; }
.dash-slider .marks { position: absolute; top: 28px; left: 0; width: 100%; font-size: 12px; color: #7f7f7f; }
.dash-slider .marks span { position: absolute; transform: translateX(-50%); }
.dash-slider .readout { position: absolute; top: 44px; right: 0; font-size: 12px; }
"#;

/// Render the full dashboard page
pub fn render_page(layout: &Layout) -> String {
    let mut body = String::new();
    for component in &layout.components {
        body.push_str(&render_component(component));
        body.push('\n');
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
{body}<script id="dash-config" type="application/json">{config}</script>
<script>{script}</script>
</body>
</html>
"#,
        title = escape_xml(&layout.title),
        style = STYLE,
        body = body,
        config = embed_json(layout),
        script = DASHBOARD_JS,
    )
}

fn render_component(component: &Component) -> String {
    match component {
        Component::Heading(heading) => render_heading(heading),
        Component::Dropdown(dropdown) => render_dropdown(dropdown),
        Component::Graph { id } => format!(
            r#"<div class="dash-graph" id="{}"></div>"#,
            escape_xml(id)
        ),
        Component::Text { text } => format!("<p>{}</p>", escape_xml(text)),
        Component::RangeSlider(slider) => render_slider(slider),
        Component::Break => "<br>".to_string(),
    }
}

fn render_heading(heading: &Heading) -> String {
    format!(
        r#"<h1 style="text-align: {}; color: {}; font-size: {}px">{}</h1>"#,
        escape_xml(&heading.align),
        escape_xml(&heading.color),
        heading.font_size,
        escape_xml(&heading.text)
    )
}

fn render_dropdown(dropdown: &Dropdown) -> String {
    let mut options = format!(
        r#"<option value="" disabled>{}</option>"#,
        escape_xml(&dropdown.placeholder)
    );
    for option in &dropdown.options {
        let selected = if option.value == dropdown.value {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            escape_xml(&option.value),
            selected,
            escape_xml(&option.label)
        ));
    }

    let search = if dropdown.searchable {
        format!(
            r#"<input type="search" class="dash-search" data-for="{}" placeholder="Search">"#,
            escape_xml(&dropdown.id)
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="dash-dropdown">{}<select id="{}" data-input>{}</select></div>"#,
        search,
        escape_xml(&dropdown.id),
        options
    )
}

fn render_slider(slider: &RangeSlider) -> String {
    let span = slider.max - slider.min;
    let mut marks = String::new();
    for mark in &slider.marks {
        if mark.value < slider.min || mark.value > slider.max || span <= 0.0 {
            continue;
        }
        let left = (mark.value - slider.min) / span * 100.0;
        marks.push_str(&format!(
            r#"<span style="left: {:.2}%">{}</span>"#,
            left,
            escape_xml(&mark.label)
        ));
    }

    // Browsers round a stepped range input down to the step grid, which
    // would hide a max off that grid. The page script snaps to the grid
    // plus the marks instead.
    let handle = |which: &str, value: f64| {
        format!(
            r#"<input type="range" class="{}" min="{}" max="{}" step="any" value="{}">"#,
            which, slider.min, slider.max, value
        )
    };

    format!(
        concat!(
            r#"<div class="dash-slider" id="{}" data-input data-range>"#,
            r#"{}{}<div class="marks">{}</div><div class="readout"></div></div>"#
        ),
        escape_xml(&slider.id),
        handle("low", slider.value[0]),
        handle("high", slider.value[1]),
        marks
    )
}

/// Serialize the layout for a `<script type="application/json">` block
fn embed_json(layout: &Layout) -> String {
    // A layout is plain data; serialization cannot fail
    let json = serde_json::to_string(layout).unwrap_or_else(|_| "{}".to_string());
    // Keep "</script>" inside strings from closing the block
    json.replace("</", "<\\/")
}
