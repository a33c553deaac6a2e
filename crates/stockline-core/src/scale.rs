// File: crates/stockline-core/src/scale.rs
// Summary: Date (X) and price (Y) scale transforms built from a filtered series.

use chrono::{Datelike, NaiveDate};

use crate::error::ChartError;
use crate::filter::FilteredSeries;
use crate::geometry::PlotRect;

/// Logical day number for a calendar date (day resolution is all we need).
fn day_number(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

/// Horizontal time scale: dates map proportionally onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f32,
    pub right_px: f32,
    t_min: f64,
    t_max: f64,
}

impl TimeScale {
    pub fn new(left_px: f32, right_px: f32, start: NaiveDate, end: NaiveDate) -> Self {
        let mut t_min = day_number(start);
        let mut t_max = day_number(end);
        // Single-date domain: widen by half a day each way so the one
        // point lands mid-plot instead of dividing by zero.
        if (t_max - t_min).abs() < 1e-9 {
            t_min -= 0.5;
            t_max += 0.5;
        }
        Self { left_px, right_px, t_min, t_max }
    }

    #[inline]
    pub fn to_px(&self, date: NaiveDate) -> f32 {
        let span = (self.t_max - self.t_min).max(1e-9);
        self.left_px
            + ((day_number(date) - self.t_min) / span) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical price scale mapping `[vmin, vmax]` to `[bottom_px, top_px]`
/// (inverted: higher price, smaller pixel Y).
#[derive(Clone, Copy, Debug)]
pub struct PriceScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl PriceScale {
    pub fn new(top_px: f32, bottom_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Zero-variance domain: widen symmetrically, same reasoning as
        // the time scale.
        if (vmax - vmin).abs() < 1e-12 {
            vmin -= 0.5;
            vmax += 0.5;
        }
        Self { top_px, bottom_px, vmin, vmax }
    }

    #[inline]
    pub fn to_px(&self, price: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px
            - ((price - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

/// The date->x and price->y mapping pair for one filtered series.
#[derive(Clone, Copy, Debug)]
pub struct ScalePair {
    pub x: TimeScale,
    pub y: PriceScale,
}

impl ScalePair {
    /// Build both scales from the series extents and the target plot region.
    ///
    /// The price domain spans the finite open and close values only; `NAN`
    /// sentinels are already excluded by the extent fold. A series with no
    /// plottable extent (empty, or nothing but sentinels) has no domain and
    /// yields [`ChartError::EmptySeries`].
    pub fn build(series: &FilteredSeries, area: PlotRect) -> Result<Self, ChartError> {
        let (d_min, d_max) = series.date_extent().ok_or(ChartError::EmptySeries)?;
        let (p_min, p_max) = series.price_extent().ok_or(ChartError::EmptySeries)?;
        Ok(Self {
            x: TimeScale::new(area.x0, area.x1, d_min, d_max),
            y: PriceScale::new(area.y0, area.y1, p_min, p_max),
        })
    }
}
