// File: crates/stockline-core/src/lib.rs
// Summary: Core library entry point; exports the CSV-to-chart pipeline API.

pub mod axis;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod grid;
pub mod parse;
pub mod project;
pub mod record;
pub mod scale;
pub mod select;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{DateTick, PriceTick};
pub use error::ChartError;
pub use filter::{filter, FilteredSeries};
pub use geometry::PlotRect;
pub use parse::parse;
pub use project::{
    project, ChartGeometry, Layer, Legend, Marker, MarkerKind, LAYER_ORDER, MARKER_RADIUS,
};
pub use record::{Dataset, StockRecord};
pub use scale::{PriceScale, ScalePair, TimeScale};
pub use select::Selection;
pub use theme::{Color, Theme};
pub use tooltip::{hit_test, resolve, TooltipContent};
pub use types::Insets;
