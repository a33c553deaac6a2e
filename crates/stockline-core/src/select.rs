// File: crates/stockline-core/src/select.rs
// Summary: Active company/month selection and its one-time default derivation.

use chrono::Month;

use crate::record::Dataset;

/// The user's active company + month choice. Owned by the selection
/// controls; the pipeline only ever reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub company: String,
    pub month: Month,
}

impl Selection {
    pub fn new(company: impl Into<String>, month: Month) -> Self {
        Self { company: company.into(), month }
    }

    /// Derive the initial selection once a non-empty dataset arrives:
    /// first company and first month in order of appearance. `None` while
    /// the dataset offers no choices, e.g. before any upload. Intended to
    /// run once per upload, when no explicit user choice exists yet.
    pub fn default_for(dataset: &Dataset) -> Option<Self> {
        let company = dataset.companies().into_iter().next()?.to_string();
        let month = dataset.months().into_iter().next()?;
        Some(Self { company, month })
    }
}
