// File: crates/rt-core/src/hint.rs
// Summary: Tooltip content for a selected data point.

use crate::config::SeriesConfig;
use crate::encode::OverlayMode;
use crate::format::{short_date, NumberFormat};
use crate::group::GroupedSeries;
use crate::record::RawRecord;
use crate::region::RegionDirectory;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintLine {
    pub title: String,
    pub value: String,
}

impl HintLine {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self { title: title.into(), value: value.into() }
    }
}

/// Shown when the selected record lacks the value a line asks for.
pub const MISSING_VALUE: &str = "n/a";

/// Formats a selected point into ordered tooltip lines.
pub trait HintFormatter {
    fn format(&self, record: &RawRecord, mode: OverlayMode) -> Vec<HintLine>;

    /// Neighbor overlay tooltip for the date of `record`, one line per region.
    fn format_neighbors(&self, record: &RawRecord, _neighbors: &GroupedSeries<String>) -> Vec<HintLine> {
        self.format(record, OverlayMode { show_neighbors: true, show_history: false })
    }
}

/// Tooltip for a single-metric chart (Rt, infections, PEI, ...).
pub struct MetricHint<'a, R: ?Sized> {
    metric: String,
    config: SeriesConfig,
    regions: &'a R,
}

impl<'a, R: RegionDirectory + ?Sized> MetricHint<'a, R> {
    pub fn new(metric: impl Into<String>, config: SeriesConfig, regions: &'a R) -> Self {
        Self { metric: metric.into(), config, regions }
    }

    fn value(&self, record: &RawRecord) -> String {
        record
            .value(&self.metric)
            .map_or_else(|| MISSING_VALUE.to_string(), |v| self.config.hint_format().format(v))
    }
}

impl<R: RegionDirectory + ?Sized> HintFormatter for MetricHint<'_, R> {
    fn format(&self, record: &RawRecord, mode: OverlayMode) -> Vec<HintLine> {
        if mode.show_neighbors {
            // The hovered record belongs to the neighbor, so its value is the neighbor's.
            vec![HintLine::new(self.regions.display_name(&record.fips), self.value(record))]
        } else {
            vec![
                HintLine::new("Date", short_date(record.date)),
                HintLine::new(self.config.display_name(&self.metric), self.value(record)),
            ]
        }
    }

    fn format_neighbors(&self, record: &RawRecord, neighbors: &GroupedSeries<String>) -> Vec<HintLine> {
        neighbors
            .iter()
            .map(|(fips, records)| {
                // Newest run wins when a neighbor carries several for the same day.
                let value = records
                    .iter()
                    .rev()
                    .find(|r| r.date == record.date)
                    .map_or_else(|| MISSING_VALUE.to_string(), |r| self.value(r));
                HintLine::new(self.regions.display_name(fips), value)
            })
            .collect()
    }
}

/// Tooltip for the test-adjusted chart: raw cases, fitted cases, infections.
#[derive(Clone, Copy, Debug)]
pub struct TestAdjustedHint {
    pub number_format: NumberFormat,
}

impl Default for TestAdjustedHint {
    fn default() -> Self {
        Self { number_format: NumberFormat::Fixed { precision: 0, grouped: true } }
    }
}

impl TestAdjustedHint {
    pub const LINES: [(&'static str, &'static str); 3] = [
        ("Cases", "corr_cases_raw"),
        ("Fitted Cases", "corr_cases_new"),
        ("Infections", "onsets"),
    ];
}

impl HintFormatter for TestAdjustedHint {
    fn format(&self, record: &RawRecord, _mode: OverlayMode) -> Vec<HintLine> {
        let mut lines = vec![HintLine::new("Date", short_date(record.date))];
        lines.extend(Self::LINES.iter().map(|(title, field)| {
            let value = record
                .value(field)
                .map_or_else(|| MISSING_VALUE.to_string(), |v| self.number_format.format(v));
            HintLine::new(*title, value)
        }));
        lines
    }
}
