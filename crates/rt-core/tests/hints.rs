// File: crates/rt-core/tests/hints.rs
// Purpose: Tooltip lines for single, neighbor and test-adjusted charts.

mod common;

use std::collections::HashMap;

use common::day;
use rt_core::hint::MISSING_VALUE;
use rt_core::region::{regions_from_json, NoRegions};
use rt_core::{HintFormatter, HintLine, MetricHint, OverlayMode, RawRecord, SeriesConfig, TestAdjustedHint};

fn regions() -> HashMap<String, rt_core::RegionInfo> {
    regions_from_json(r#"{"06037": {"county": "Los Angeles", "state": "CA"}, "06059": {"county": "Orange"}}"#)
        .expect("region table")
}

#[test]
fn single_mode_shows_date_and_formatted_value() {
    let table = regions();
    let hint = MetricHint::new("Rt", SeriesConfig::for_metric("Rt"), &table);
    let rec = RawRecord::new(day("2021-03-07"), "06037").with_value("Rt", 1.23456);
    assert_eq!(
        hint.format(&rec, OverlayMode::single()),
        vec![HintLine::new("Date", "3/7"), HintLine::new("Rt", "1.23")]
    );
}

#[test]
fn single_mode_uses_short_name_and_configured_format() {
    let hint = MetricHint::new("PEI", SeriesConfig::for_metric("PEI"), &NoRegions);
    let rec = RawRecord::new(day("2021-03-07"), "1").with_value("PEI", 0.456);
    assert_eq!(hint.format(&rec, OverlayMode::single())[1], HintLine::new("PEI", "46%"));

    let hint = MetricHint::new("infectionsPC", SeriesConfig::for_metric("infectionsPC"), &NoRegions);
    let rec = RawRecord::new(day("2021-03-07"), "1").with_value("infectionsPC", 1234.5);
    assert_eq!(hint.format(&rec, OverlayMode::single())[1], HintLine::new("IPC", "1,234.50"));
}

#[test]
fn neighbor_mode_shows_region_name_with_its_own_value() {
    let table = regions();
    let hint = MetricHint::new("Rt", SeriesConfig::for_metric("Rt"), &table);
    let mode = OverlayMode { show_neighbors: true, show_history: false };
    let rec = RawRecord::new(day("2021-03-07"), "06059").with_value("Rt", 0.87);
    assert_eq!(hint.format(&rec, mode), vec![HintLine::new("Orange", "0.87")]);

    let unknown = RawRecord::new(day("2021-03-07"), "99999");
    assert_eq!(hint.format(&unknown, mode), vec![HintLine::new("99999", MISSING_VALUE)]);
}

#[test]
fn test_adjusted_hint_lists_three_series() {
    let rec = RawRecord::new(day("2021-01-15"), "1")
        .with_value("corr_cases_raw", 1520.0)
        .with_value("corr_cases_new", 1411.6)
        .with_value("onsets", 2000.2);
    let lines = TestAdjustedHint::default().format(&rec, OverlayMode::single());
    let titles: Vec<&str> = lines.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["Date", "Cases", "Fitted Cases", "Infections"]);
    assert_eq!(lines[1].value, "1,520");
    assert_eq!(lines[2].value, "1,412");
    assert_eq!(lines[3].value, "2,000");
}
