// File: crates/stockline-core/tests/pipeline.rs
// Purpose: End-to-end scenarios: parse -> filter -> scale -> project -> tooltip.

use chrono::Month;
use stockline_core::{
    filter, hit_test, parse, project, resolve, ChartGeometry, MarkerKind, PlotRect, ScalePair,
    Selection, LAYER_ORDER,
};

const CSV: &str = "Company,Date,Open,Close\n\
                   Apple,2023-11-01,150.00,152.50\n\
                   Apple,2023-11-02,152.50,151.00\n";

#[test]
fn november_scenario_projects_both_polylines() {
    let dataset = parse(CSV);
    let series = filter(&dataset, &Selection::new("Apple", Month::November));
    assert_eq!(series.len(), 2);

    let scales = ScalePair::build(&series, PlotRect::default()).unwrap();
    let g = project(&series, &scales);
    assert_eq!(g.open_polyline.len(), 2);
    assert_eq!(g.close_polyline.len(), 2);
    assert_eq!(g.markers.len(), 4);
    for p in g.open_polyline.iter().chain(&g.close_polyline) {
        assert!(p.0.is_finite() && p.1.is_finite());
    }
}

#[test]
fn tooltip_formats_prices_and_difference() {
    let series = filter(&parse(CSV), &Selection::new("Apple", Month::November));

    let text = resolve(0, &series).unwrap().to_string();
    assert!(text.contains("Date: 11/1/2023"), "got: {text}");
    assert!(text.contains("Open: $150.00"));
    assert!(text.contains("Close: $152.50"));
    assert!(text.contains("Difference: $2.50"));

    // Negative difference keeps its sign after the currency prefix.
    let text = resolve(1, &series).unwrap().to_string();
    assert!(text.contains("Difference: $-1.50"), "got: {text}");

    assert!(resolve(2, &series).is_none());
}

#[test]
fn december_scenario_yields_the_empty_state() {
    let dataset = parse(CSV);
    let series = filter(&dataset, &Selection::new("Apple", Month::December));
    assert!(series.is_empty());

    // The caller falls back to empty geometry when no scales exist.
    let g = match ScalePair::build(&series, PlotRect::default()) {
        Ok(scales) => project(&series, &scales),
        Err(_) => ChartGeometry::default(),
    };
    assert!(g.is_empty());
    assert!(g.open_polyline.is_empty());
    assert!(g.close_polyline.is_empty());
    assert!(hit_test(&g, 400.0, 180.0).is_none());
}

#[test]
fn markers_are_hit_targets() {
    let series = filter(&parse(CSV), &Selection::new("Apple", Month::November));
    let scales = ScalePair::build(&series, PlotRect::default()).unwrap();
    let g = project(&series, &scales);

    let m = &g.markers[0];
    assert_eq!(m.kind, MarkerKind::Open);
    let hit = hit_test(&g, m.x + 2.0, m.y - 2.0).unwrap();
    assert_eq!(hit.record_index, m.record_index);
    assert_eq!(hit.kind, m.kind);

    assert!(hit_test(&g, m.x + 20.0, m.y + 20.0).is_none());
}

#[test]
fn hover_to_tooltip_round_trip() {
    let series = filter(&parse(CSV), &Selection::new("Apple", Month::November));
    let scales = ScalePair::build(&series, PlotRect::default()).unwrap();
    let g = project(&series, &scales);

    let close_marker = g
        .markers
        .iter()
        .find(|m| m.kind == MarkerKind::Close && m.record_index == 1)
        .unwrap();
    let tip = resolve(close_marker.record_index, &series).unwrap();
    assert_eq!(tip.date, "11/2/2023");
    assert_eq!(tip.close, "$151.00");
}

#[test]
fn sentinel_price_rows_project_without_breaking_scales() {
    let csv = "Company,Date,Open,Close\n\
               Apple,2023-11-01,150.00,152.50\n\
               Apple,2023-11-02,oops,151.00\n";
    let series = filter(&parse(csv), &Selection::new("Apple", Month::November));
    assert_eq!(series.len(), 2, "sentinel rows still match the selection");

    let scales = ScalePair::build(&series, PlotRect::default()).unwrap();
    let g = project(&series, &scales);
    assert_eq!(g.open_polyline.len(), 2);
    assert!(g.open_polyline[1].1.is_nan(), "sentinel projects non-finite");
    assert!(g.close_polyline[1].1.is_finite());
    // Non-finite markers are not hit targets.
    let bad = g.markers.iter().find(|m| m.y.is_nan()).unwrap();
    assert!(hit_test(&g, bad.x, 0.0).is_none());
}

#[test]
fn layer_order_contract_is_stable() {
    use stockline_core::Layer::*;
    assert_eq!(
        LAYER_ORDER,
        [Gridlines, Axes, OpenPolyline, ClosePolyline, Markers, TickLabels, Legend]
    );
    let legend = ChartGeometry::default().legend;
    assert_eq!(legend.entries[0].label, "Open");
    assert_eq!(legend.entries[1].label, "Close");
}
