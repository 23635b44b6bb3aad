// File: crates/rt-core/src/chart.rs
// Summary: Frame builders that turn records + view state into render-ready chart frames.

use chrono::{DateTime, Utc};

use crate::axis::YAxis;
use crate::color::palette;
use crate::config::SeriesConfig;
use crate::encode::{OverlayMode, VisualEncoder};
use crate::group::{group_by_region, group_by_run_date, GroupedSeries};
use crate::hint::{HintFormatter, HintLine, TestAdjustedHint};
use crate::legend::Legend;
use crate::record::RawRecord;
use crate::series::{Series, SeriesKind, SeriesStyle};
use crate::smooth::{smooth_records, SMOOTHING_WINDOW};
use crate::view::{Selection, SharedViewport};

pub type TimeRange = (DateTime<Utc>, DateTime<Utc>);

pub const BAR_WIDTH: f64 = 0.92;

/// The series whose nearest-point events may select a record.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverSource {
    pub series: usize,
    records: Vec<RawRecord>,
}

/// Everything the renderer needs for one paint.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
    /// `None` = renderer picks the full extent.
    pub x_domain: Option<TimeRange>,
    pub y_axis: YAxis,
    /// Paint order: first is bottom-most.
    pub series: Vec<Series>,
    pub hover: Option<HoverSource>,
    pub hint: Option<Vec<HintLine>>,
    pub legend: Legend,
}

impl ChartFrame {
    /// Nearest-point event from the renderer. Ignored unless it comes from the
    /// hover series; otherwise selects the record closest to `x`.
    pub fn on_nearest_xy(&self, series_index: usize, x: DateTime<Utc>, selection: &mut Selection) {
        let Some(hover) = &self.hover else { return };
        if hover.series != series_index {
            return;
        }
        let nearest = hover
            .records
            .iter()
            .min_by_key(|r| (r.instant() - x).num_milliseconds().unsigned_abs());
        if let Some(r) = nearest {
            selection.hover(r.clone());
        }
    }

    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    fn full_extent(series: &[Series]) -> Option<TimeRange> {
        series.iter().filter_map(Series::x_extent).reduce(|(a0, a1), (b0, b1)| (a0.min(b0), a1.max(b1)))
    }
}

fn hint_for<H: HintFormatter + ?Sized>(
    hint: &H,
    selection: &Selection,
    viewport: &SharedViewport,
    mode: OverlayMode,
    neighbors: Option<&GroupedSeries<String>>,
) -> Option<Vec<HintLine>> {
    let record = selection.selected()?;
    // A point brushed out of view keeps no tooltip.
    if let Some(vp) = viewport.get() {
        if !vp.contains(record.instant()) {
            return None;
        }
    }
    Some(match neighbors {
        Some(groups) if mode.show_neighbors => hint.format_neighbors(record, groups),
        _ => hint.format(record, mode),
    })
}

/// Model results chart for one metric: newest run emphasised, optional run
/// history and neighbor overlays.
pub struct ResultsChart<H> {
    metric: String,
    config: SeriesConfig,
    mode: OverlayMode,
    hint: H,
    legend: Legend,
}

impl<H: HintFormatter> ResultsChart<H> {
    pub fn new(metric: impl Into<String>, hint: H) -> Self {
        let metric = metric.into();
        let config = SeriesConfig::for_metric(&metric);
        let legend = Legend::for_metric(&metric, &config);
        Self { metric, config, mode: OverlayMode::single(), hint, legend }
    }

    pub fn with_mode(mut self, mode: OverlayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn build(
        &self,
        results: &[RawRecord],
        neighbors: Option<&[RawRecord]>,
        viewport: &SharedViewport,
        selection: &Selection,
    ) -> ChartFrame {
        let metric = self.metric.as_str();
        let runs = group_by_run_date(results);
        let newest = runs.last();
        let shown: Vec<(Option<chrono::NaiveDate>, &[RawRecord])> = if self.mode.show_history {
            runs.iter().map(|(k, v)| (*k, v)).collect()
        } else {
            newest.map(|(k, v)| (*k, v)).into_iter().collect()
        };

        let mut series = Vec::new();

        if metric == "PEI" {
            if let Some((_, latest)) = newest {
                let mut style = SeriesStyle::line(palette::PEI_BACKDROP, 1.0, 0.0);
                style.fill = Some(palette::PEI_BACKDROP);
                series.push(Series::from_records("backdrop", SeriesKind::Area, latest, metric, style));
            }
        }

        let encoder = VisualEncoder::new(&self.config);
        let neighbor_groups = neighbors.filter(|_| self.mode.show_neighbors).map(group_by_region);
        if let Some(groups) = &neighbor_groups {
            for (fips, records) in groups.iter() {
                series.push(Series::from_records(
                    format!("neighbor:{fips}"),
                    SeriesKind::Line,
                    records,
                    metric,
                    encoder.neighbor_style(),
                ));
            }
        }

        let n = shown.len();
        let mut hover = None;
        for (i, (run_date, records)) in shown.iter().enumerate() {
            let name = match run_date {
                Some(d) => format!("run:{d}"),
                None => "run".to_string(),
            };
            if VisualEncoder::drives_selection(i, n, self.mode) {
                hover = Some(HoverSource {
                    series: series.len(),
                    records: records.iter().filter(|r| r.value(metric).is_some()).cloned().collect(),
                });
            }
            series.push(Series::from_records(name, SeriesKind::Line, records, metric, encoder.style(i, n)));
        }

        tracing::debug!(
            metric,
            runs = runs.len(),
            shown = n,
            series = series.len(),
            "built results frame"
        );

        ChartFrame {
            x_domain: viewport.x_domain(ChartFrame::full_extent(&series)),
            y_axis: YAxis::from_config(&self.config),
            series,
            hover,
            hint: hint_for(&self.hint, selection, viewport, self.mode, neighbor_groups.as_ref()),
            legend: self.legend.clone(),
        }
    }
}

/// Raw input chart (cases or deaths): daily bars plus a smoothed trend line.
pub struct InputChart {
    metric: String,
    config: SeriesConfig,
    window: usize,
}

impl InputChart {
    pub fn new(metric: impl Into<String>) -> Self {
        let metric = metric.into();
        let config = SeriesConfig::for_metric(&metric);
        Self { metric, config, window: SMOOTHING_WINDOW }
    }

    fn legend(&self) -> Legend {
        Legend::default()
            .row(self.config.fill.unwrap_or(palette::CASES_FILL), self.config.display_name(&self.metric))
            .row(palette::SMOOTHED_LINE, format!("{}-day average", self.window))
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn build(&self, data: &[RawRecord], viewport: &SharedViewport) -> ChartFrame {
        let metric = self.metric.as_str();
        let bar_color = self.config.color.unwrap_or(palette::CASES_BAR);
        let bars_style = SeriesStyle {
            fill: self.config.fill,
            bar_width: Some(BAR_WIDTH),
            ..SeriesStyle::line(bar_color, 1.0, 1.0)
        };
        let bars = Series::from_records("bars", SeriesKind::Bars, data, metric, bars_style);

        let smoothed = smooth_records(data, metric, self.window);
        let trend = Series::from_smoothed("average", &smoothed, SeriesStyle::line(palette::SMOOTHED_LINE, 1.0, 2.0));

        let series = vec![bars, trend];
        ChartFrame {
            x_domain: viewport.x_domain(ChartFrame::full_extent(&series)),
            y_axis: YAxis::from_config(&self.config),
            series,
            hover: None,
            hint: None,
            legend: self.legend(),
        }
    }
}

/// Test-adjusted cases chart: reported cases as bars, fitted cases and
/// inferred infections as lines.
pub struct TestAdjustedChart {
    hint: TestAdjustedHint,
    legend: Legend,
}

impl Default for TestAdjustedChart {
    fn default() -> Self {
        Self { hint: TestAdjustedHint::default(), legend: Legend::test_adjusted() }
    }
}

impl TestAdjustedChart {
    pub fn build(&self, data: &[RawRecord], viewport: &SharedViewport, selection: &Selection) -> ChartFrame {
        let bars_style = SeriesStyle {
            fill: Some(palette::CASES_FILL),
            bar_width: Some(BAR_WIDTH),
            ..SeriesStyle::line(palette::CASES_FILL, 0.6, 0.0)
        };
        let series = vec![
            Series::from_records("cases", SeriesKind::Bars, data, "corr_cases_raw", bars_style),
            Series::from_records(
                "fitted",
                SeriesKind::Line,
                data,
                "corr_cases_new",
                SeriesStyle::line(palette::FITTED_CASES, 0.9, 2.0),
            ),
            Series::from_records(
                "infections",
                SeriesKind::Line,
                data,
                "onsets",
                SeriesStyle::line(palette::INFECTIONS, 0.7, 2.0),
            ),
        ];
        let hover = HoverSource {
            series: 1,
            records: data.iter().filter(|r| r.corr_cases_new.is_some()).cloned().collect(),
        };
        ChartFrame {
            x_domain: viewport.x_domain(ChartFrame::full_extent(&series)),
            y_axis: YAxis {
                domain: None,
                ticks: None,
                grid_ticks: None,
                format: Some(crate::format::NumberFormat::SiPrefix { significant: 2 }),
                tick_total: 3,
            },
            series,
            hover: Some(hover),
            hint: hint_for(&self.hint, selection, viewport, OverlayMode::single(), None),
            legend: self.legend.clone(),
        }
    }
}
