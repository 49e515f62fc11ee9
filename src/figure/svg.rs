//! SVG Rendering
//!
//! Draws figures as standalone SVG documents that the dashboard page can
//! drop straight into the DOM.

use super::{Figure, PieFigure, ScatterFigure};
use std::f64::consts::PI;

const PIE_WIDTH: f64 = 640.0;
const PIE_HEIGHT: f64 = 420.0;
const PIE_RADIUS: f64 = 150.0;

const SCATTER_WIDTH: f64 = 760.0;
const SCATTER_HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 170.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Slices smaller than this fraction get no percentage label
const MIN_LABEL_FRACTION: f64 = 0.04;

const TEXT_COLOR: &str = "#2a3f5f";
const GRID_COLOR: &str = "#e5ecf6";

/// Render any figure to SVG
pub fn render(figure: &Figure) -> String {
    match figure {
        Figure::Pie(pie) => render_pie(pie),
        Figure::Scatter(scatter) => render_scatter(scatter),
    }
}

/// Render a pie chart with a legend on the right
pub fn render_pie(figure: &PieFigure) -> String {
    let mut body = String::new();

    if figure.is_empty() {
        body.push_str(&no_data(PIE_WIDTH, PIE_HEIGHT));
        return document(PIE_WIDTH, PIE_HEIGHT, &figure.title, &body);
    }

    let cx = PIE_WIDTH * 0.4;
    let cy = PIE_HEIGHT / 2.0 + 15.0;
    let total = figure.total();

    // Start at 12 o'clock, go clockwise
    let mut angle = -PI / 2.0;
    for slice in figure.slices.iter().filter(|s| s.value > 0.0) {
        let fraction = slice.value / total;
        let sweep = fraction * 2.0 * PI;

        if fraction >= 0.9999 {
            body.push_str(&format!(
                r##"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white" stroke-width="1"/>"##,
                cx, cy, PIE_RADIUS, slice.color
            ));
        } else {
            let (x0, y0) = polar(cx, cy, PIE_RADIUS, angle);
            let (x1, y1) = polar(cx, cy, PIE_RADIUS, angle + sweep);
            let large_arc = if sweep > PI { 1 } else { 0 };
            body.push_str(&format!(
                r##"<path d="M {:.1} {:.1} L {:.1} {:.1} A {:.1} {:.1} 0 {} 1 {:.1} {:.1} Z" fill="{}" stroke="white" stroke-width="1"/>"##,
                cx, cy, x0, y0, PIE_RADIUS, PIE_RADIUS, large_arc, x1, y1, slice.color
            ));
        }

        if fraction >= MIN_LABEL_FRACTION {
            let (lx, ly) = polar(cx, cy, PIE_RADIUS * 0.65, angle + sweep / 2.0);
            body.push_str(&format!(
                r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" dominant-baseline="middle" font-size="12" fill="white">{:.1}%</text>"##,
                lx, ly, fraction * 100.0
            ));
        }

        angle += sweep;
    }

    let legend_x = cx + PIE_RADIUS + 50.0;
    for (i, slice) in figure.slices.iter().enumerate() {
        let y = MARGIN_TOP + 20.0 + i as f64 * 22.0;
        body.push_str(&format!(
            r##"<rect x="{:.1}" y="{:.1}" width="12" height="12" fill="{}"/><text x="{:.1}" y="{:.1}" font-size="12" fill="{}">{}</text>"##,
            legend_x,
            y,
            slice.color,
            legend_x + 18.0,
            y + 10.0,
            TEXT_COLOR,
            escape_xml(&slice.label),
        ));
    }

    document(PIE_WIDTH, PIE_HEIGHT, &figure.title, &body)
}

/// Render a scatter chart with axes, ticks and a legend on the right
pub fn render_scatter(figure: &ScatterFigure) -> String {
    let mut body = String::new();

    let plot_left = MARGIN_LEFT;
    let plot_right = SCATTER_WIDTH - MARGIN_RIGHT;
    let plot_top = MARGIN_TOP;
    let plot_bottom = SCATTER_HEIGHT - MARGIN_BOTTOM;

    body.push_str(&format!(
        r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"##,
        plot_left,
        plot_top,
        plot_right - plot_left,
        plot_bottom - plot_top,
        GRID_COLOR
    ));

    // Axis titles
    body.push_str(&format!(
        r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="{}">{}</text>"##,
        (plot_left + plot_right) / 2.0,
        SCATTER_HEIGHT - 15.0,
        TEXT_COLOR,
        escape_xml(&figure.x_label)
    ));
    body.push_str(&format!(
        r##"<text x="20" y="{:.1}" text-anchor="middle" font-size="12" fill="{}" transform="rotate(-90, 20, {:.1})">{}</text>"##,
        (plot_top + plot_bottom) / 2.0,
        TEXT_COLOR,
        (plot_top + plot_bottom) / 2.0,
        escape_xml(&figure.y_label)
    ));

    let Some((x_min, x_max)) = figure.x_extent() else {
        body.push_str(&no_data(SCATTER_WIDTH - MARGIN_RIGHT + MARGIN_LEFT, SCATTER_HEIGHT));
        return document(SCATTER_WIDTH, SCATTER_HEIGHT, &figure.title, &body);
    };

    // Pad the x domain so edge points are not clipped
    let (x_lo, x_hi) = if x_max > x_min {
        let pad = (x_max - x_min) * 0.05;
        (x_min - pad, x_max + pad)
    } else {
        (x_min - 500.0, x_max + 500.0)
    };
    let (y_lo, y_hi) = (-0.25, 1.25);

    let sx = |x: f64| plot_left + (x - x_lo) / (x_hi - x_lo) * (plot_right - plot_left);
    let sy = |y: f64| plot_bottom - (y - y_lo) / (y_hi - y_lo) * (plot_bottom - plot_top);

    for tick in ticks(x_lo, x_hi, 6) {
        let x = sx(tick);
        body.push_str(&format!(
            r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="white"/><text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11" fill="{}">{}</text>"##,
            x, plot_top, x, plot_bottom, x, plot_bottom + 18.0, TEXT_COLOR, format_tick(tick)
        ));
    }

    for class in [0.0, 1.0] {
        let y = sy(class);
        body.push_str(&format!(
            r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="white"/><text x="{:.1}" y="{:.1}" text-anchor="end" dominant-baseline="middle" font-size="11" fill="{}">{}</text>"##,
            plot_left, y, plot_right, y, plot_left - 8.0, y, TEXT_COLOR, class
        ));
    }

    for trace in &figure.traces {
        for point in &trace.points {
            body.push_str(&format!(
                r##"<circle cx="{:.1}" cy="{:.1}" r="5" fill="{}" opacity="0.85"><title>{}: {} kg, class {}</title></circle>"##,
                sx(point.x),
                sy(point.y),
                trace.color,
                escape_xml(&trace.name),
                point.x,
                point.y
            ));
        }
    }

    let legend_x = plot_right + 20.0;
    body.push_str(&format!(
        r##"<text x="{:.1}" y="{:.1}" font-size="12" fill="{}">Booster Version Category</text>"##,
        legend_x, plot_top + 5.0, TEXT_COLOR
    ));
    for (i, trace) in figure.traces.iter().enumerate() {
        let y = plot_top + 25.0 + i as f64 * 20.0;
        body.push_str(&format!(
            r##"<circle cx="{:.1}" cy="{:.1}" r="5" fill="{}"/><text x="{:.1}" y="{:.1}" font-size="12" fill="{}">{}</text>"##,
            legend_x + 6.0,
            y,
            trace.color,
            legend_x + 18.0,
            y + 4.0,
            TEXT_COLOR,
            escape_xml(&trace.name),
        ));
    }

    document(SCATTER_WIDTH, SCATTER_HEIGHT, &figure.title, &body)
}

fn document(width: f64, height: f64, title: &str, body: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="'Open Sans', verdana, arial, sans-serif" style="background:white">
  <text x="20" y="30" font-size="17" fill="{color}">{title}</text>
  {body}
</svg>"##,
        w = width,
        h = height,
        color = TEXT_COLOR,
        title = escape_xml(title),
        body = body
    )
}

fn no_data(width: f64, height: f64) -> String {
    format!(
        r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14" fill="#7f7f7f">No data</text>"##,
        width / 2.0,
        height / 2.0
    )
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Evenly spaced "nice" tick values (steps of 1, 2 or 5 × 10^k) within [lo, hi]
pub fn ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    if !(hi > lo) || target == 0 {
        return vec![lo];
    }

    let raw = (hi - lo) / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    let mut values = Vec::new();
    let mut tick = (lo / step).ceil() * step;
    while tick <= hi + step * 1e-9 {
        // Avoid printing -0
        values.push(if tick == 0.0 { 0.0 } else { tick });
        tick += step;
    }
    values
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Escape text for use in SVG/HTML content and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{PieSlice, ScatterPoint, ScatterTrace};

    fn slice(label: &str, value: f64, color: &str) -> PieSlice {
        PieSlice {
            label: label.to_string(),
            value,
            color: color.to_string(),
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape_xml("KSC LC-39A"), "KSC LC-39A");
    }

    #[test]
    fn test_pie_paths_and_legend() {
        let pie = PieFigure {
            title: "Outcomes".to_string(),
            slices: vec![slice("Success", 3.0, "#00CC96"), slice("Failure", 1.0, "#EF553B")],
        };
        let svg = render_pie(&pie);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains("75.0%"));
        assert!(svg.contains("25.0%"));
        assert!(svg.contains(">Success</text>"));
        assert!(svg.contains(">Outcomes</text>"));
    }

    #[test]
    fn test_single_slice_is_full_circle() {
        let pie = PieFigure {
            title: "All good".to_string(),
            slices: vec![slice("Success", 7.0, "#00CC96")],
        };
        let svg = render_pie(&pie);

        assert_eq!(svg.matches("<path").count(), 0);
        assert!(svg.contains(r##"fill="#00CC96" stroke="white""##));
        assert!(svg.contains("100.0%"));
    }

    #[test]
    fn test_empty_figures_say_no_data() {
        let pie = PieFigure {
            title: "Nothing <here>".to_string(),
            slices: vec![],
        };
        let svg = render(&Figure::Pie(pie));
        assert!(svg.contains("No data"));
        assert!(svg.contains("Nothing &lt;here&gt;"));

        let scatter = ScatterFigure {
            title: "Empty".to_string(),
            x_label: "Payload Mass (kg)".to_string(),
            y_label: "Class".to_string(),
            traces: vec![],
        };
        assert!(render_scatter(&scatter).contains("No data"));
    }

    #[test]
    fn test_scatter_points_and_legend() {
        let scatter = ScatterFigure {
            title: "Scatter".to_string(),
            x_label: "Payload Mass (kg)".to_string(),
            y_label: "Class".to_string(),
            traces: vec![
                ScatterTrace {
                    name: "v1.0".to_string(),
                    color: "#636EFA".to_string(),
                    points: vec![
                        ScatterPoint { x: 0.0, y: 0.0 },
                        ScatterPoint { x: 525.0, y: 1.0 },
                    ],
                },
                ScatterTrace {
                    name: "FT".to_string(),
                    color: "#EF553B".to_string(),
                    points: vec![ScatterPoint { x: 9600.0, y: 1.0 }],
                },
            ],
        };
        let svg = render_scatter(&scatter);

        // 3 data points + 2 legend markers
        assert_eq!(svg.matches("<circle").count(), 5);
        assert!(svg.contains("<title>FT: 9600 kg, class 1</title>"));
        assert!(svg.contains(">Booster Version Category</text>"));
        assert!(svg.contains(">Payload Mass (kg)</text>"));
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ticks(0.0, 10_000.0, 5), vec![0.0, 2000.0, 4000.0, 6000.0, 8000.0, 10_000.0]);
        assert_eq!(ticks(-480.0, 10_080.0, 6), vec![0.0, 2000.0, 4000.0, 6000.0, 8000.0, 10_000.0]);
        assert_eq!(ticks(5.0, 5.0, 6), vec![5.0]);
    }
}
