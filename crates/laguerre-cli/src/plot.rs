//! Radial wavefunction samples as CSV and as an SVG line chart.

use std::io::Write;

use anyhow::{Context, Result, bail};
use laguerre_algebra::{Orbital, RadialWavefunction};
use laguerre_model::EvaluationConfig;

/// One curve of the chart.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Sample R_nl(r) on `samples` points of [0, r_max] for every orbital.
pub fn sample_orbitals(
    orbitals: &[Orbital],
    z: f64,
    r_max: f64,
    samples: usize,
    config: &EvaluationConfig,
) -> Result<Vec<Series>> {
    if samples < 2 {
        bail!("at least two samples are needed (got {samples})");
    }
    if !(r_max.is_finite() && r_max > 0.0) {
        bail!("r-max must be a positive number (got {r_max})");
    }
    orbitals
        .iter()
        .map(|&orbital| {
            let wavefunction = RadialWavefunction::new(orbital, z, config)?;
            Ok(Series {
                label: orbital.to_string(),
                points: wavefunction.sample(r_max, samples),
            })
        })
        .collect()
}

/// `r` followed by one column per series. All series must share the grid.
pub fn write_csv<W: Write>(writer: W, series: &[Series]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    let mut header = vec!["r".to_string()];
    header.extend(series.iter().map(|s| format!("R_{}", s.label)));
    csv.write_record(&header).context("write CSV header")?;

    let rows = series.first().map_or(0, |s| s.points.len());
    for i in 0..rows {
        let mut record = Vec::with_capacity(series.len() + 1);
        let r = series[0].points[i].0;
        record.push(format!("{r:.6}"));
        for s in series {
            let (_, value) = s.points.get(i).context("series have different lengths")?;
            record.push(format!("{value:.9}"));
        }
        csv.write_record(&record).context("write CSV row")?;
    }
    csv.flush().context("flush CSV")?;
    Ok(())
}

/// Fixed chart layout.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub padding: f64,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 900,
            height: 560,
            padding: 60.0,
            title: "Hydrogen radial wavefunctions".to_string(),
            x_label: "r (Bohr radii)".to_string(),
            y_label: "R(r)".to_string(),
        }
    }
}

const PALETTE: [&str; 8] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#17becf",
];
const FONT: &str = "DejaVu Sans, Arial, sans-serif";
const TICKS: usize = 5;

struct Frame {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn x(&self, value: f64) -> f64 {
        self.left + (value - self.x_min) / (self.x_max - self.x_min) * self.width
    }

    fn y(&self, value: f64) -> f64 {
        self.top + (self.y_max - value) / (self.y_max - self.y_min) * self.height
    }
}

/// Render the series as an SVG line chart with axes, a zero line and a
/// legend.
pub fn render_svg(series: &[Series], options: &ChartOptions) -> String {
    let frame = frame_for(series, options);
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>",
        w = options.width,
        h = options.height
    ));
    svg.push_str(&format!(
        "<rect width='{}' height='{}' fill='#ffffff'/>",
        options.width, options.height
    ));
    svg.push_str(&format!("<title>{}</title>", escape_xml(&options.title)));

    svg.push_str(&axes_svg(&frame, options));

    for (index, s) in series.iter().enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        let points: Vec<String> = s
            .points
            .iter()
            .filter(|(_, y)| y.is_finite())
            .map(|&(x, y)| format!("{:.2},{:.2}", frame.x(x), frame.y(y)))
            .collect();
        svg.push_str(&format!(
            "<polyline fill='none' stroke='{color}' stroke-width='1.8' points='{}'/>",
            points.join(" ")
        ));
    }

    svg.push_str(&legend_svg(series, &frame));
    svg.push_str("</svg>");
    svg
}

fn frame_for(series: &[Series], options: &ChartOptions) -> Frame {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = 0.0f64;
    let mut y_max = 0.0f64;
    for &(x, y) in series.iter().flat_map(|s| s.points.iter()) {
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if x_min >= x_max {
        x_min = 0.0;
        x_max = 1.0;
    }
    if y_max - y_min < f64::EPSILON {
        y_max = y_min + 1.0;
    }
    let margin = (y_max - y_min) * 0.05;
    Frame {
        x_min,
        x_max,
        y_min: y_min - margin,
        y_max: y_max + margin,
        left: options.padding,
        top: options.padding * 0.75,
        width: f64::from(options.width) - options.padding * 1.5,
        height: f64::from(options.height) - options.padding * 1.75,
    }
}

fn axes_svg(frame: &Frame, options: &ChartOptions) -> String {
    let right = frame.left + frame.width;
    let bottom = frame.top + frame.height;
    let mut svg = String::new();

    svg.push_str("<g stroke='#4a4a4a' stroke-width='1' fill='none'>");
    svg.push_str(&format!(
        "<rect x='{:.2}' y='{:.2}' width='{:.2}' height='{:.2}'/>",
        frame.left, frame.top, frame.width, frame.height
    ));
    svg.push_str("</g>");

    let zero = frame.y(0.0);
    svg.push_str(&format!(
        "<line x1='{:.2}' y1='{zero:.2}' x2='{right:.2}' y2='{zero:.2}' stroke='#999999' stroke-dasharray='4 3'/>",
        frame.left
    ));

    svg.push_str(&format!(
        "<g fill='#333333' font-size='12' font-family='{FONT}'>"
    ));
    for i in 0..=TICKS {
        let t = i as f64 / TICKS as f64;
        let x_value = frame.x_min + t * (frame.x_max - frame.x_min);
        let x = frame.x(x_value);
        svg.push_str(&format!(
            "<text x='{x:.2}' y='{:.2}' text-anchor='middle'>{}</text>",
            bottom + 16.0,
            tick_label(x_value)
        ));
        let y_value = frame.y_min + t * (frame.y_max - frame.y_min);
        let y = frame.y(y_value);
        svg.push_str(&format!(
            "<text x='{:.2}' y='{:.2}' text-anchor='end'>{}</text>",
            frame.left - 6.0,
            y + 4.0,
            tick_label(y_value)
        ));
    }
    svg.push_str("</g>");

    svg.push_str(&format!(
        "<g fill='#111111' font-family='{FONT}'>"
    ));
    svg.push_str(&format!(
        "<text x='{:.2}' y='{:.2}' font-size='18' font-weight='600' text-anchor='middle'>{}</text>",
        frame.left + frame.width / 2.0,
        frame.top - 14.0,
        escape_xml(&options.title)
    ));
    svg.push_str(&format!(
        "<text x='{:.2}' y='{:.2}' font-size='14' text-anchor='middle'>{}</text>",
        frame.left + frame.width / 2.0,
        bottom + 38.0,
        escape_xml(&options.x_label)
    ));
    svg.push_str(&format!(
        "<text x='16' y='{:.2}' font-size='14' text-anchor='middle' transform='rotate(-90 16 {:.2})'>{}</text>",
        frame.top + frame.height / 2.0,
        frame.top + frame.height / 2.0,
        escape_xml(&options.y_label)
    ));
    svg.push_str("</g>");
    svg
}

fn legend_svg(series: &[Series], frame: &Frame) -> String {
    if series.is_empty() {
        return String::new();
    }
    let swatch = 14.0;
    let line_height = 18.0;
    let padding = 8.0;
    let width = 90.0;
    let height = padding * 2.0 + line_height * series.len() as f64;
    let x0 = frame.left + frame.width - width - padding;
    let y0 = frame.top + padding;

    let mut svg = String::from("<g>");
    svg.push_str(&format!(
        "<rect x='{x0:.2}' y='{y0:.2}' width='{width:.2}' height='{height:.2}' fill='#ffffff' fill-opacity='0.85' stroke='#cccccc'/>"
    ));
    for (index, s) in series.iter().enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        let y = y0 + padding + line_height * index as f64 + line_height / 2.0;
        svg.push_str(&format!(
            "<line x1='{:.2}' y1='{y:.2}' x2='{:.2}' y2='{y:.2}' stroke='{color}' stroke-width='2.5'/>",
            x0 + padding,
            x0 + padding + swatch
        ));
        svg.push_str(&format!(
            "<text x='{:.2}' y='{:.2}' font-size='12' font-family='{FONT}' fill='#111111'>{}</text>",
            x0 + padding + swatch + 6.0,
            y + 4.0,
            escape_xml(&s.label)
        ));
    }
    svg.push_str("</g>");
    svg
}

fn tick_label(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
