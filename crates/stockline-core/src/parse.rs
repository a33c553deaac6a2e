// File: crates/stockline-core/src/parse.rs
// Summary: Permissive CSV-to-Dataset parser (header row + comma-separated fields).

use chrono::NaiveDate;
use log::{debug, trace, warn};

use crate::record::{Dataset, StockRecord};

/// Parse raw CSV text into a [`Dataset`].
///
/// The first line names the columns; `Company`, `Date`, `Open` and `Close`
/// are looked up case-insensitively and any other columns are ignored. Every
/// non-empty data row yields one record: fields are trimmed, short rows leave
/// the missing fields at their sentinels, unparseable prices become `NAN` and
/// unparseable dates become `None`. Nothing here is an error; invalid
/// sentinels are excluded downstream when filtering and computing extents.
pub fn parse(text: &str) -> Dataset {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = match rdr.headers() {
        Ok(h) => h.iter().map(|s| s.to_string()).collect(),
        Err(err) => {
            warn!("unreadable header row: {err}");
            return Dataset::default();
        }
    };
    let idx = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let i_company = idx("Company");
    let i_date = idx("Date");
    let i_open = idx("Open");
    let i_close = idx("Close");
    if i_company.is_none() || i_date.is_none() || i_open.is_none() || i_close.is_none() {
        warn!("header {headers:?} is missing one of Company/Date/Open/Close");
    }

    let mut records = Vec::new();
    for rec in rdr.records() {
        let rec = match rec {
            Ok(r) => r,
            Err(err) => {
                trace!("skipping unreadable row: {err}");
                continue;
            }
        };
        let field = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).unwrap_or("");

        let date = parse_date(field(i_date));
        if date.is_none() {
            trace!("row {}: unparseable date {:?}", records.len() + 1, field(i_date));
        }
        records.push(StockRecord {
            company: field(i_company).to_string(),
            date,
            open: parse_price(field(i_open)),
            close: parse_price(field(i_close)),
        });
    }

    debug!("parsed {} records from {} bytes of CSV", records.len(), text.len());
    Dataset::new(records)
}

/// Decimal price; malformed input maps to the `NAN` sentinel, never an error.
fn parse_price(s: &str) -> f64 {
    s.parse().unwrap_or(f64::NAN)
}

/// ISO dates first, with a `m/d/Y` fallback for US-style exports.
fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}
