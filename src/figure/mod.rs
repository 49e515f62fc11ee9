//! Chart Figures
//!
//! Declarative chart specifications built from analytics results. A
//! figure carries everything a renderer needs (title, labels, values,
//! colours) and nothing about how it is drawn. `svg` renders figures to
//! standalone SVG documents; the JSON form is served as-is for clients
//! that draw their own charts.

pub mod pie;
pub mod scatter;
pub mod svg;

pub use pie::{pie_from_success, success_pie};
pub use scatter::{payload_scatter, scatter_from_points};

use serde::Serialize;

/// Default qualitative palette, assigned to categories in order
pub const PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Fixed colour of the "Success" slice
pub const SUCCESS_COLOR: &str = "#00CC96";
/// Fixed colour of the "Failure" slice
pub const FAILURE_COLOR: &str = "#EF553B";

/// Palette colour for the `index`-th category (wraps around)
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Any chart the dashboard can display
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Figure {
    Pie(PieFigure),
    Scatter(ScatterFigure),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Pie(pie) => &pie.title,
            Figure::Scatter(scatter) => &scatter.title,
        }
    }
}

impl From<PieFigure> for Figure {
    fn from(value: PieFigure) -> Self {
        Figure::Pie(value)
    }
}

impl From<ScatterFigure> for Figure {
    fn from(value: ScatterFigure) -> Self {
        Figure::Scatter(value)
    }
}

/// Pie chart: labelled slices sized by value
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl PieFigure {
    /// Sum of all slice values
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Whether there is anything to draw
    pub fn is_empty(&self) -> bool {
        self.total() <= 0.0
    }
}

/// Scatter chart: one coloured trace per category
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub traces: Vec<ScatterTrace>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterTrace {
    pub name: String,
    pub color: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

impl ScatterFigure {
    pub fn point_count(&self) -> usize {
        self.traces.iter().map(|t| t.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Min and max x over all points
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let mut xs = self.traces.iter().flat_map(|t| t.points.iter().map(|p| p.x));
        let first = xs.next()?;
        Some(xs.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
    }
}
