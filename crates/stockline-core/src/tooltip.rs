// File: crates/stockline-core/src/tooltip.rs
// Summary: Tooltip content resolution and marker hit-testing.

use std::cmp::Ordering;
use std::fmt;

use crate::axis::format_date;
use crate::filter::FilteredSeries;
use crate::project::{ChartGeometry, Marker, MARKER_RADIUS};

/// Formatted text for one hovered record. Placement and visibility belong to
/// the presentation layer; this is a pure value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    pub date: String,
    pub open: String,
    pub close: String,
    /// Signed close − open, `$` prefixed like the prices.
    pub difference: String,
}

impl fmt::Display for TooltipContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {}\nOpen: {}\nClose: {}\nDifference: {}",
            self.date, self.open, self.close, self.difference
        )
    }
}

/// Resolve the tooltip for the record at `index`. `None` when the index is
/// out of range.
pub fn resolve(index: usize, series: &FilteredSeries) -> Option<TooltipContent> {
    let r = series.get(index)?;
    Some(TooltipContent {
        date: r.date.map(format_date).unwrap_or_default(),
        open: format!("${:.2}", r.open),
        close: format!("${:.2}", r.close),
        difference: format!("${:.2}", r.close - r.open),
    })
}

/// Nearest marker within the marker radius of a pointer position, if any.
/// Non-finite markers (price-sentinel records) are never hit.
pub fn hit_test(geometry: &ChartGeometry, px: f32, py: f32) -> Option<&Marker> {
    let r2 = MARKER_RADIUS * MARKER_RADIUS;
    geometry
        .markers
        .iter()
        .filter(|m| m.x.is_finite() && m.y.is_finite())
        .map(|m| (m, (m.x - px).powi(2) + (m.y - py).powi(2)))
        .filter(|&(_, d2)| d2 <= r2)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
        .map(|(m, _)| m)
}
