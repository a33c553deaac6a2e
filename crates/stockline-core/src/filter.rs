// File: crates/stockline-core/src/filter.rs
// Summary: Company/month record filter and the filtered series with its extents.

use chrono::NaiveDate;

use crate::record::{Dataset, StockRecord};
use crate::select::Selection;

/// Select the records matching the active company and calendar month.
///
/// Company comparison is exact and case-sensitive; the month comparison is on
/// the date's calendar month, so records with an unparsed date never match.
/// Order is the dataset's relative order; the filter does not re-sort.
pub fn filter(dataset: &Dataset, selection: &Selection) -> FilteredSeries {
    let records = dataset
        .records()
        .iter()
        .filter(|r| r.company == selection.company && r.month() == Some(selection.month))
        .cloned()
        .collect();
    FilteredSeries { records }
}

/// Subset of the dataset matching one selection. An empty series is a valid
/// outcome (the empty chart state) and is distinct from "no dataset loaded",
/// which the caller sees on the dataset itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilteredSeries {
    records: Vec<StockRecord>,
}

impl FilteredSeries {
    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&StockRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Min/max over all finite open and close prices. `None` when no record
    /// carries a finite price; `NAN` sentinels never reach the fold.
    pub fn price_extent(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let mut any = false;
        for r in &self.records {
            for p in [r.open, r.close] {
                if p.is_finite() {
                    lo = lo.min(p);
                    hi = hi.max(p);
                    any = true;
                }
            }
        }
        if any {
            Some((lo, hi))
        } else {
            None
        }
    }

    /// Min/max over all parsed dates. `None` when no record has one.
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut it = self.records.iter().filter_map(|r| r.date);
        let first = it.next()?;
        let (lo, hi) = it.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some((lo, hi))
    }
}
