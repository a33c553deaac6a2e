// File: crates/stockline-core/src/project.rs
// Summary: Projection of a filtered series through the scales into drawable geometry.

use crate::axis::{self, DateTick, PriceTick};
use crate::filter::FilteredSeries;
use crate::scale::ScalePair;
use crate::types::WIDTH;

/// Marker radius in pixels; doubles as the tooltip hit-test tolerance.
pub const MARKER_RADIUS: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    Open,
    Close,
}

/// A single plotted point, usable both for drawing and as a hover hit target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub x: f32,
    pub y: f32,
    /// Index of the source record in the filtered series.
    pub record_index: usize,
    pub kind: MarkerKind,
}

/// Back-to-front drawing layers. The order is a contract: later layers must
/// render on top of earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Gridlines,
    Axes,
    OpenPolyline,
    ClosePolyline,
    Markers,
    TickLabels,
    Legend,
}

pub const LAYER_ORDER: [Layer; 7] = [
    Layer::Gridlines,
    Layer::Axes,
    Layer::OpenPolyline,
    Layer::ClosePolyline,
    Layer::Markers,
    Layer::TickLabels,
    Layer::Legend,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub kind: MarkerKind,
}

/// Two fixed swatches at a fixed offset outside the plot area; not
/// data-dependent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Legend {
    pub x: f32,
    pub y: f32,
    pub swatch_size: f32,
    pub row_step: f32,
    pub entries: [LegendEntry; 2],
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            x: WIDTH as f32 + 20.0,
            y: 100.0,
            swatch_size: 15.0,
            row_step: 20.0,
            entries: [
                LegendEntry { label: "Open", kind: MarkerKind::Open },
                LegendEntry { label: "Close", kind: MarkerKind::Close },
            ],
        }
    }
}

/// Concrete pixel-space drawing instructions for one filtered series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartGeometry {
    /// One (x, y) per record, using the open price.
    pub open_polyline: Vec<(f32, f32)>,
    /// One (x, y) per record, using the close price.
    pub close_polyline: Vec<(f32, f32)>,
    /// Two markers per record (open and close).
    pub markers: Vec<Marker>,
    pub price_ticks: Vec<PriceTick>,
    pub date_ticks: Vec<DateTick>,
    pub legend: Legend,
}

impl ChartGeometry {
    /// No polylines, markers or ticks: the empty chart state.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Project every record to pixel space and lay out ticks and legend.
///
/// Polyline length equals the series length for both prices; a record whose
/// price sentinel survived filtering projects to a non-finite point, which
/// renderers skip (extents never saw it, so the scales are unaffected).
pub fn project(series: &FilteredSeries, scales: &ScalePair) -> ChartGeometry {
    let mut g = ChartGeometry::default();
    for (i, r) in series.records().iter().enumerate() {
        let x = r.date.map(|d| scales.x.to_px(d)).unwrap_or(f32::NAN);
        let y_open = scales.y.to_px(r.open);
        let y_close = scales.y.to_px(r.close);
        g.open_polyline.push((x, y_open));
        g.close_polyline.push((x, y_close));
        g.markers.push(Marker { x, y: y_open, record_index: i, kind: MarkerKind::Open });
        g.markers.push(Marker { x, y: y_close, record_index: i, kind: MarkerKind::Close });
    }
    g.price_ticks = axis::price_ticks(scales);
    g.date_ticks = axis::date_ticks(series, scales);
    g
}
