// File: crates/rt-core/tests/config.rs
// Purpose: Metric descriptors and value formatting.

use chrono::NaiveDate;
use rt_core::format::short_date;
use rt_core::{Color, NumberFormat, SeriesConfig, YAxis};

#[test]
fn unknown_metric_gets_fallback_config() {
    let conf = SeriesConfig::for_metric("hospitalizations");
    assert_eq!(conf, SeriesConfig::fallback());
    assert_eq!(conf.y_domain, Some((0.0, 10000.0)));
    assert_eq!(conf.stroke_color, Some(Color::rgb(56, 230, 252)));
    assert_eq!(conf.y_tick_format, None);
}

#[test]
fn known_metrics_carry_their_domains() {
    let rt = SeriesConfig::for_metric("Rt");
    assert_eq!(rt.y_domain, Some((0.0, 2.0)));
    assert_eq!(rt.y_axis_ticks.as_deref(), Some(&[0.5, 1.0, 1.5][..]));

    let ipc = SeriesConfig::for_metric("infectionsPC");
    assert_eq!(ipc.display_name("infectionsPC"), "IPC");
    assert_eq!(ipc.y_domain, Some((0.0, 500.0)));

    let pei = SeriesConfig::for_metric("PEI");
    assert_eq!(YAxis::from_config(&pei).tick_labels(), vec!["0%", "33%", "50%", "67%", "100%"]);

    assert_eq!(SeriesConfig::for_metric("cases").y_domain, None);
    assert_eq!(SeriesConfig::for_metric("deaths").y_tick_format, Some(NumberFormat::SiPrefix { significant: 1 }));
}

#[test]
fn si_prefix_rounds_to_significant_digits() {
    let two = NumberFormat::SiPrefix { significant: 2 };
    assert_eq!(two.format(1500.0), "1.5k");
    assert_eq!(two.format(150.0), "150");
    assert_eq!(two.format(155.0), "160");
    assert_eq!(two.format(999_000.0), "1.0M");
    assert_eq!(two.format(0.0), "0.0");
    assert_eq!(two.format(-2500.0), "-2.5k");
    let one = NumberFormat::SiPrefix { significant: 1 };
    assert_eq!(one.format(1234.0), "1k");
    assert_eq!(one.format(0.5), "500m");
}

#[test]
fn fixed_format_groups_thousands() {
    assert_eq!(NumberFormat::DEFAULT_HINT.format(1234567.891), "1,234,567.89");
    assert_eq!(NumberFormat::DEFAULT_HINT.format(-1234.5), "-1,234.50");
    assert_eq!(NumberFormat::DEFAULT_HINT.format(1.2), "1.20");
    assert_eq!(NumberFormat::Fixed { precision: 1, grouped: false }.format(1234.56), "1234.6");
}

#[test]
fn dates_use_month_slash_day() {
    assert_eq!(short_date(NaiveDate::from_ymd_opt(2021, 3, 7).unwrap()), "3/7");
    assert_eq!(short_date(NaiveDate::from_ymd_opt(2020, 12, 25).unwrap()), "12/25");
}

#[test]
fn colours_round_trip_through_css() {
    let c: Color = "rgba(0, 145, 255, 1)".parse().unwrap();
    assert_eq!(c, Color::rgb(0, 145, 255));
    assert_eq!(Color::rgba(50, 50, 0, 0.5).to_string(), "rgba(50, 50, 0, 0.5)");
    assert_eq!("gray".parse::<Color>().unwrap(), Color::GRAY);
    assert!("hsl(1, 2%, 3%)".parse::<Color>().is_err());
}
