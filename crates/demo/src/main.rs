// File: crates/demo/src/main.rs
// Summary: Demo collaborator: loads a prices CSV, runs the pipeline, writes an SVG chart.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Month;
use stockline_core::types::{HEIGHT, WIDTH};
use stockline_core::{
    filter, parse, project, resolve, ChartGeometry, Color, Layer, PlotRect, ScalePair,
    Selection, Theme, LAYER_ORDER, MARKER_RADIUS,
};

/// Extra width to the right of the plot for the legend swatches.
const LEGEND_GUTTER: i32 = 100;

fn main() -> Result<()> {
    env_logger::init();

    // Usage: stockline-demo [prices.csv] [company] [month]
    let path = std::env::args().nth(1).unwrap_or_else(|| "prices.csv".to_string());
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;

    let dataset = parse(&text);
    if dataset.is_empty() {
        anyhow::bail!("no records parsed from {path}; check headers/delimiter.");
    }
    println!(
        "Loaded {} records; companies: {:?}",
        dataset.len(),
        dataset.companies()
    );

    let selection = match (std::env::args().nth(2), std::env::args().nth(3)) {
        (Some(company), Some(month)) => {
            let month: Month = month
                .parse()
                .map_err(|_| anyhow::anyhow!("unrecognized month: {month}"))?;
            Selection::new(company, month)
        }
        _ => Selection::default_for(&dataset)
            .context("dataset has no usable company/month to default to")?,
    };
    println!("Selection: {} / {}", selection.company, selection.month.name());

    let series = filter(&dataset, &selection);
    if series.is_empty() {
        println!(
            "No data for {} in {}; nothing to draw.",
            selection.company,
            selection.month.name()
        );
        return Ok(());
    }

    let plot = PlotRect::default();
    let scales = ScalePair::build(&series, plot)?;
    let geometry = project(&series, &scales);

    if let Some(tip) = resolve(series.len() - 1, &series) {
        println!("Latest point:\n{tip}");
    }

    let svg = render_svg(&geometry, &plot, &Theme::default());
    let out = out_name(&path, &selection);
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, svg).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Output file name like target/out/<stem>_<company>_<month>.svg
fn out_name(input: &str, selection: &Selection) -> PathBuf {
    let stem = Path::new(input)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("chart");
    PathBuf::from("target/out").join(format!(
        "{}_{}_{}.svg",
        stem,
        selection.company.to_lowercase(),
        selection.month.name().to_lowercase()
    ))
}

/// Emit the geometry as a standalone SVG document, one pass per layer in the
/// contract order so later layers paint on top.
fn render_svg(g: &ChartGeometry, plot: &PlotRect, theme: &Theme) -> String {
    let w = WIDTH + LEGEND_GUTTER;
    let h = HEIGHT;
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="{w}" height="{h}" fill="{}"/>"#,
        theme.background.to_hex()
    );

    for layer in LAYER_ORDER {
        match layer {
            Layer::Gridlines => {
                for t in &g.price_ticks {
                    let _ = writeln!(
                        svg,
                        r#"  <line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{}"/>"#,
                        plot.x0,
                        plot.x1,
                        theme.grid.to_hex(),
                        y = t.y
                    );
                }
            }
            Layer::Axes => {
                let c = theme.axis_line.to_hex();
                let _ = writeln!(
                    svg,
                    r#"  <line x1="{x}" y1="0" x2="{x}" y2="{h}" stroke="{c}" stroke-width="2"/>"#,
                    x = plot.x0
                );
                let _ = writeln!(
                    svg,
                    r#"  <line x1="0" y1="{y}" x2="{WIDTH}" y2="{y}" stroke="{c}" stroke-width="2"/>"#,
                    y = plot.y1
                );
            }
            Layer::OpenPolyline => polyline(&mut svg, &g.open_polyline, theme.open),
            Layer::ClosePolyline => polyline(&mut svg, &g.close_polyline, theme.close),
            Layer::Markers => {
                for m in g.markers.iter().filter(|m| m.x.is_finite() && m.y.is_finite()) {
                    let _ = writeln!(
                        svg,
                        r#"  <circle cx="{:.1}" cy="{:.1}" r="{MARKER_RADIUS}" fill="{}"/>"#,
                        m.x,
                        m.y,
                        theme.series_color(m.kind).to_hex()
                    );
                }
            }
            Layer::TickLabels => {
                let c = theme.tick_label.to_hex();
                for t in &g.price_ticks {
                    let _ = writeln!(
                        svg,
                        r#"  <text x="{x}" y="{y}" text-anchor="end" font-size="12" fill="{c}">{label}</text>"#,
                        x = plot.x0 - 6.0,
                        y = t.y,
                        label = t.label
                    );
                }
                for t in &g.date_ticks {
                    let y = plot.y1 + 20.0;
                    let _ = writeln!(
                        svg,
                        r#"  <text x="{x}" y="{y}" text-anchor="middle" font-size="12" fill="{c}" transform="rotate({rot}, {x}, {y})">{label}</text>"#,
                        x = t.x,
                        rot = t.rotation_deg,
                        label = t.label
                    );
                }
            }
            Layer::Legend => {
                let l = &g.legend;
                for (i, e) in l.entries.iter().enumerate() {
                    let y = l.y + i as f32 * l.row_step;
                    let _ = writeln!(
                        svg,
                        r#"  <rect x="{x}" y="{y}" width="{s}" height="{s}" fill="{}"/>"#,
                        theme.series_color(e.kind).to_hex(),
                        x = l.x,
                        s = l.swatch_size
                    );
                    let _ = writeln!(
                        svg,
                        r#"  <text x="{x}" y="{ty}" font-size="12" fill="{}">{}</text>"#,
                        theme.tick_label.to_hex(),
                        e.label,
                        x = l.x + l.swatch_size + 5.0,
                        ty = y + 12.0
                    );
                }
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn polyline(svg: &mut String, pts: &[(f32, f32)], color: Color) {
    let points = pts
        .iter()
        .filter(|p| p.0.is_finite() && p.1.is_finite())
        .map(|p| format!("{:.1},{:.1}", p.0, p.1))
        .collect::<Vec<_>>()
        .join(" ");
    if points.is_empty() {
        return;
    }
    let _ = writeln!(
        svg,
        r#"  <polyline fill="none" stroke="{}" stroke-width="2" points="{points}"/>"#,
        color.to_hex()
    );
}
