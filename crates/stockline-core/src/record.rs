// File: crates/stockline-core/src/record.rs
// Summary: Stock record and dataset models produced by the CSV parser.

use chrono::{Datelike, Month, NaiveDate};

/// One daily price row. Fields that failed to parse carry sentinels
/// (`None` date, `NAN` price) rather than rejecting the row.
#[derive(Clone, Debug, PartialEq)]
pub struct StockRecord {
    pub company: String,
    pub date: Option<NaiveDate>,
    pub open: f64,
    pub close: f64,
}

impl StockRecord {
    /// Calendar month of the record's date, when the date parsed.
    pub fn month(&self) -> Option<Month> {
        self.date.and_then(|d| Month::try_from(d.month() as u8).ok())
    }

    /// True when every field needed for plotting is usable.
    pub fn is_plottable(&self) -> bool {
        self.date.is_some() && self.open.is_finite() && self.close.is_finite()
    }
}

/// Full parsed collection of stock records from one upload, in input row
/// order. Replaced wholesale on the next upload, never mutated in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<StockRecord>,
}

impl Dataset {
    pub fn new(records: Vec<StockRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct companies in order of first appearance; feeds the
    /// company selection control.
    pub fn companies(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.records {
            if !out.contains(&r.company.as_str()) {
                out.push(r.company.as_str());
            }
        }
        out
    }

    /// Distinct months of valid dates in order of first appearance; feeds
    /// the month selection control. Records with an unparsed date
    /// contribute nothing.
    pub fn months(&self) -> Vec<Month> {
        let mut out: Vec<Month> = Vec::new();
        for r in &self.records {
            if let Some(m) = r.month() {
                if !out.contains(&m) {
                    out.push(m);
                }
            }
        }
        out
    }
}
