//! SVG bar and pie charts of label counts.

use std::f64::consts::PI;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::SentimentError;
use crate::types::LabelCounts;

const WIDTH: f64 = 1200.0;
const HEIGHT: f64 = 500.0;

// Bar panel plot area.
const BAR_LEFT: f64 = 80.0;
const BAR_RIGHT: f64 = 560.0;
const BAR_TOP: f64 = 80.0;
const BAR_BOTTOM: f64 = 430.0;

const PIE_CX: f64 = 900.0;
const PIE_CY: f64 = 260.0;
const PIE_RADIUS: f64 = 150.0;
/// Degrees, measured counter-clockwise from 3 o'clock.
const PIE_START_ANGLE: f64 = 140.0;

/// Render both charts side by side as a standalone SVG document.
#[must_use]
pub fn render_chart_svg(counts: &LabelCounts, generated_at: DateTime<Utc>) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" \
         viewBox=\"0 0 {WIDTH} {HEIGHT}\" font-family=\"sans-serif\">\n"
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    render_bar_panel(&mut svg, counts);
    render_pie_panel(&mut svg, counts);
    svg.push_str(&format!(
        "<text x=\"{x}\" y=\"{y}\" font-size=\"11\" fill=\"#666\" text-anchor=\"end\">\
         {total} tweets, generated {ts}</text>\n",
        x = WIDTH - 10.0,
        y = HEIGHT - 10.0,
        total = counts.sum(),
        ts = generated_at.format("%Y-%m-%d %H:%M UTC"),
    ));
    svg.push_str("</svg>\n");
    svg
}

/// Render the chart and write it to `path`.
///
/// # Errors
///
/// Returns [`SentimentError::Io`] if the file cannot be written.
pub fn write_chart(path: &Path, counts: &LabelCounts) -> Result<(), SentimentError> {
    let svg = render_chart_svg(counts, Utc::now());
    std::fs::write(path, svg).map_err(|e| SentimentError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), "wrote sentiment chart");
    Ok(())
}

fn render_bar_panel(svg: &mut String, counts: &LabelCounts) {
    let center = f64::midpoint(BAR_LEFT, BAR_RIGHT);
    svg.push_str(&format!(
        "<text x=\"{center}\" y=\"40\" font-size=\"18\" text-anchor=\"middle\">\
         Sentiment Distribution (Bar)</text>\n"
    ));
    svg.push_str(&format!(
        "<text x=\"25\" y=\"{mid}\" font-size=\"13\" text-anchor=\"middle\" \
         transform=\"rotate(-90 25 {mid})\">Tweet Count</text>\n",
        mid = f64::midpoint(BAR_TOP, BAR_BOTTOM),
    ));

    #[allow(clippy::cast_precision_loss)]
    let max = counts.iter().map(|(_, n)| n).max().unwrap_or(0) as f64;
    let step = tick_step(max);
    let axis_max = if max > 0.0 {
        (max / step).ceil() * step
    } else {
        1.0
    };
    let plot_height = BAR_BOTTOM - BAR_TOP;
    let y_for = |value: f64| BAR_BOTTOM - value / axis_max * plot_height;

    let mut tick = 0.0;
    while tick <= axis_max {
        let y = y_for(tick);
        svg.push_str(&format!(
            "<line x1=\"{BAR_LEFT}\" y1=\"{y:.2}\" x2=\"{BAR_RIGHT}\" y2=\"{y:.2}\" \
             stroke=\"#ddd\"/>\n<text x=\"{x:.2}\" y=\"{ty:.2}\" font-size=\"11\" \
             text-anchor=\"end\">{tick}</text>\n",
            x = BAR_LEFT - 6.0,
            ty = y + 4.0,
        ));
        tick += step;
    }
    svg.push_str(&format!(
        "<line x1=\"{BAR_LEFT}\" y1=\"{BAR_BOTTOM}\" x2=\"{BAR_RIGHT}\" y2=\"{BAR_BOTTOM}\" \
         stroke=\"black\"/>\n"
    ));

    let slot = (BAR_RIGHT - BAR_LEFT) / 3.0;
    let bar_width = slot * 0.5;
    for (i, (label, count)) in counts.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let (i, value) = (i as f64, count as f64);
        let x = BAR_LEFT + slot * i + (slot - bar_width) / 2.0;
        let y = y_for(value);
        let label_x = x + bar_width / 2.0;
        svg.push_str(&format!(
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{bar_width:.2}\" height=\"{h:.2}\" \
             fill=\"{color}\"><title>{name}: {count}</title></rect>\n",
            h = BAR_BOTTOM - y,
            color = label.color(),
            name = label.display_name(),
        ));
        svg.push_str(&format!(
            "<text x=\"{label_x:.2}\" y=\"{ly:.2}\" font-size=\"12\" text-anchor=\"middle\">\
             {count}</text>\n<text x=\"{label_x:.2}\" y=\"{ny:.2}\" font-size=\"13\" \
             text-anchor=\"middle\">{name}</text>\n",
            ly = y - 6.0,
            ny = BAR_BOTTOM + 20.0,
            name = label.as_str(),
        ));
    }
}

fn render_pie_panel(svg: &mut String, counts: &LabelCounts) {
    svg.push_str(&format!(
        "<text x=\"{PIE_CX}\" y=\"40\" font-size=\"18\" text-anchor=\"middle\">\
         Sentiment Distribution (Pie)</text>\n"
    ));

    let total = counts.sum();
    if total == 0 {
        svg.push_str(&format!(
            "<circle cx=\"{PIE_CX}\" cy=\"{PIE_CY}\" r=\"{PIE_RADIUS}\" fill=\"none\" \
             stroke=\"#ccc\" stroke-dasharray=\"6 4\"/>\n<text x=\"{PIE_CX}\" y=\"{PIE_CY}\" \
             font-size=\"16\" text-anchor=\"middle\" fill=\"#666\">No data</text>\n"
        ));
        return;
    }

    #[allow(clippy::cast_precision_loss)]
    let total = total as f64;
    let mut start = PIE_START_ANGLE;
    // Zero-count labels get no wedge but keep their "Label (0)" legend entry.
    for (label, count) in counts.iter() {
        #[allow(clippy::cast_precision_loss)]
        let fraction = count as f64 / total;
        let sweep = fraction * 360.0;
        let end = start + sweep;
        let mid = start + sweep / 2.0;

        if count > 0 {
            if fraction >= 1.0 {
                svg.push_str(&format!(
                    "<circle cx=\"{PIE_CX}\" cy=\"{PIE_CY}\" r=\"{PIE_RADIUS}\" fill=\"{color}\"/>\n",
                    color = label.color(),
                ));
            } else {
                let (x1, y1) = pie_point(start, PIE_RADIUS);
                let (x2, y2) = pie_point(end, PIE_RADIUS);
                let large_arc = u8::from(sweep > 180.0);
                // Counter-clockwise on screen is sweep-flag 0 because SVG's y axis points down.
                svg.push_str(&format!(
                    "<path d=\"M {PIE_CX} {PIE_CY} L {x1:.2} {y1:.2} \
                     A {PIE_RADIUS} {PIE_RADIUS} 0 {large_arc} 0 {x2:.2} {y2:.2} Z\" \
                     fill=\"{color}\" stroke=\"white\"/>\n",
                    color = label.color(),
                ));
            }

            let (px, py) = pie_point(mid, PIE_RADIUS * 0.6);
            svg.push_str(&format!(
                "<text x=\"{px:.2}\" y=\"{py:.2}\" font-size=\"13\" text-anchor=\"middle\" \
                 fill=\"white\">{pct:.1}%</text>\n",
                pct = fraction * 100.0,
            ));
        }

        let (lx, ly) = pie_point(mid, PIE_RADIUS * 1.15);
        let anchor = if lx < PIE_CX { "end" } else { "start" };
        svg.push_str(&format!(
            "<text x=\"{lx:.2}\" y=\"{ly:.2}\" font-size=\"13\" text-anchor=\"{anchor}\">\
             {name} ({count})</text>\n",
            name = label.display_name(),
        ));

        start = end;
    }
}

/// Point on the pie at `angle_deg` (counter-clockwise from 3 o'clock).
fn pie_point(angle_deg: f64, radius: f64) -> (f64, f64) {
    let rad = angle_deg * PI / 180.0;
    (PIE_CX + radius * rad.cos(), PIE_CY - radius * rad.sin())
}

/// Gridline spacing giving at most ~5 ticks: 1, 2 or 5 times a power of ten.
fn tick_step(max: f64) -> f64 {
    if max <= 5.0 {
        return 1.0;
    }
    let raw = max / 5.0;
    let magnitude = 10_f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}
