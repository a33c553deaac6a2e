// File: crates/stockline-core/src/error.rs
// Summary: Pipeline error type.

use thiserror::Error;

/// The one fallible step in the pipeline. Parse-level anomalies are handled
/// by sentinel exclusion and never surface here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// The filtered series has no plottable records, so neither scale has a
    /// domain. Callers render the empty state instead of a chart.
    #[error("filtered series has no plottable records")]
    EmptySeries,
}
