// File: crates/stockline-core/tests/filter.rs
// Purpose: Validate company/month filtering, choice lists and default selection.

use chrono::Month;
use stockline_core::{filter, parse, Selection};

const CSV: &str = "Company,Date,Open,Close\n\
                   Apple,2023-11-01,150.00,152.50\n\
                   Google,2023-11-01,130.00,131.25\n\
                   Apple,2023-11-02,152.50,151.00\n\
                   Apple,2023-12-01,155.00,154.00\n\
                   Google,2023-12-05,133.00,132.00\n";

#[test]
fn filter_matches_company_and_month_only() {
    let ds = parse(CSV);
    let series = filter(&ds, &Selection::new("Apple", Month::November));
    assert_eq!(series.len(), 2);
    for r in series.records() {
        assert_eq!(r.company, "Apple");
        assert_eq!(r.month(), Some(Month::November));
    }
}

#[test]
fn company_match_is_case_sensitive() {
    let ds = parse(CSV);
    assert!(filter(&ds, &Selection::new("apple", Month::November)).is_empty());
}

#[test]
fn filtered_output_is_a_stable_subsequence() {
    let ds = parse(CSV);
    let series = filter(&ds, &Selection::new("Apple", Month::November));
    let dates: Vec<_> = series.records().iter().map(|r| r.date).collect();
    let mut in_dataset_order: Vec<_> = ds
        .records()
        .iter()
        .filter(|r| r.company == "Apple" && r.month() == Some(Month::November))
        .map(|r| r.date)
        .collect();
    assert_eq!(dates, in_dataset_order);
    in_dataset_order.sort();
    assert_eq!(dates, in_dataset_order, "well-formed input arrives date-ascending");
}

#[test]
fn empty_result_is_valid() {
    let ds = parse(CSV);
    let series = filter(&ds, &Selection::new("Apple", Month::January));
    assert!(series.is_empty());
    assert!(series.price_extent().is_none());
    assert!(series.date_extent().is_none());
}

#[test]
fn invalid_date_records_never_match_a_month() {
    let ds = parse("Company,Date,Open,Close\nApple,bogus,150.00,152.50\n");
    for month in [Month::January, Month::November, Month::December] {
        assert!(filter(&ds, &Selection::new("Apple", month)).is_empty());
    }
}

#[test]
fn choice_lists_follow_first_appearance() {
    let ds = parse(CSV);
    assert_eq!(ds.companies(), vec!["Apple", "Google"]);
    assert_eq!(ds.months(), vec![Month::November, Month::December]);
}

#[test]
fn default_selection_takes_first_company_and_month() {
    let ds = parse(CSV);
    let sel = Selection::default_for(&ds).unwrap();
    assert_eq!(sel.company, "Apple");
    assert_eq!(sel.month, Month::November);
}

#[test]
fn default_selection_is_none_without_choices() {
    assert!(Selection::default_for(&parse("")).is_none());
    // Records exist but no month can be derived from them.
    let ds = parse("Company,Date,Open,Close\nApple,bogus,1,2\n");
    assert!(Selection::default_for(&ds).is_none());
}
