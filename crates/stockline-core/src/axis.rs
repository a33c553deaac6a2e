// File: crates/stockline-core/src/axis.rs
// Summary: Axis tick generation and label formatting.

use chrono::NaiveDate;

use crate::filter::FilteredSeries;
use crate::grid::linspace;
use crate::scale::ScalePair;

/// Price ticks across the Y domain, both ends included.
pub const PRICE_TICK_COUNT: usize = 6;
/// Target number of date labels along the X axis.
pub const DATE_TICK_TARGET: usize = 6;
/// Date labels are rotated so adjacent ticks stay readable.
pub const DATE_LABEL_ROTATION_DEG: f32 = -45.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PriceTick {
    pub value: f64,
    pub y: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateTick {
    /// Index of the source record in the filtered series.
    pub index: usize,
    pub x: f32,
    pub label: String,
    pub rotation_deg: f32,
}

/// Six evenly spaced price ticks over the Y domain, labeled `$X.XX`.
pub fn price_ticks(scales: &ScalePair) -> Vec<PriceTick> {
    linspace(scales.y.vmin, scales.y.vmax, PRICE_TICK_COUNT)
        .into_iter()
        .map(|v| PriceTick {
            value: v,
            y: scales.y.to_px(v),
            label: format!("${v:.2}"),
        })
        .collect()
}

/// Date ticks subsampled by index: stride = ceil(len / target), so short
/// series label every point and long series stay near the target count.
pub fn date_ticks(series: &FilteredSeries, scales: &ScalePair) -> Vec<DateTick> {
    let n = series.len();
    if n == 0 {
        return Vec::new();
    }
    let stride = (n + DATE_TICK_TARGET - 1) / DATE_TICK_TARGET;
    series
        .records()
        .iter()
        .enumerate()
        .filter(|(i, _)| i % stride == 0)
        .filter_map(|(i, r)| {
            r.date.map(|d| DateTick {
                index: i,
                x: scales.x.to_px(d),
                label: format_date(d),
                rotation_deg: DATE_LABEL_ROTATION_DEG,
            })
        })
        .collect()
}

/// Short date label, `11/1/2023` style.
pub fn format_date(d: NaiveDate) -> String {
    d.format("%-m/%-d/%Y").to_string()
}
