// File: crates/rt-core/src/config.rs
// Summary: Per-metric series descriptors (domain, ticks, colours, formatter).

use crate::color::{palette, Color};
use crate::format::NumberFormat;

/// Rendering descriptor for one metric.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesConfig {
    /// Fixed y-domain; `None` lets the renderer autoscale (count metrics).
    pub y_domain: Option<(f64, f64)>,
    pub y_axis_ticks: Option<Vec<f64>>,
    pub y_grid_ticks: Option<Vec<f64>>,
    pub y_tick_format: Option<NumberFormat>,
    pub stroke_color: Option<Color>,
    pub neighbor_stroke_color: Option<Color>,
    /// Colour of the most recent series; falls back to `stroke_color`.
    pub stroke_color_emphasis: Option<Color>,
    /// Bar stroke / fill for raw-input charts.
    pub color: Option<Color>,
    pub fill: Option<Color>,
    pub short_name: Option<&'static str>,
}

impl SeriesConfig {
    /// Resolve the descriptor for a metric. Never fails: unknown metrics get
    /// [`SeriesConfig::fallback`].
    pub fn for_metric(metric: &str) -> Self {
        match metric {
            "Rt" => Self {
                y_domain: Some((0.0, 2.0)),
                y_axis_ticks: Some(vec![0.5, 1.0, 1.5]),
                stroke_color: Some(palette::RT_STROKE),
                neighbor_stroke_color: Some(palette::RT_NEIGHBOR),
                stroke_color_emphasis: Some(palette::RT_EMPHASIS),
                ..Self::empty()
            },
            "infectionsPC" => Self {
                short_name: Some("IPC"),
                y_domain: Some((0.0, 500.0)),
                y_axis_ticks: Some(vec![0.0, 100.0, 200.0, 300.0, 400.0]),
                stroke_color: Some(palette::CYAN_STROKE),
                stroke_color_emphasis: Some(palette::BLUE_EMPHASIS),
                ..Self::empty()
            },
            "PEI" => Self {
                y_domain: Some((0.0, 1.0)),
                y_axis_ticks: Some(vec![0.0, 0.33, 0.5, 0.67, 1.0]),
                y_grid_ticks: Some(vec![0.0, 0.33, 0.5, 0.67, 1.0]),
                y_tick_format: Some(NumberFormat::Percent { precision: 0 }),
                stroke_color: Some(palette::CYAN_STROKE),
                stroke_color_emphasis: Some(palette::BLUE_EMPHASIS),
                ..Self::empty()
            },
            "cases" => Self {
                y_tick_format: Some(NumberFormat::SiPrefix { significant: 2 }),
                color: Some(palette::CASES_BAR),
                fill: Some(palette::CASES_FILL),
                ..Self::empty()
            },
            "deaths" => Self {
                y_tick_format: Some(NumberFormat::SiPrefix { significant: 1 }),
                color: Some(palette::DEATHS_BAR),
                fill: Some(palette::DEATHS_BAR),
                ..Self::empty()
            },
            other => {
                tracing::debug!(metric = other, "no series config for metric, using fallback");
                Self::fallback()
            }
        }
    }

    /// Default descriptor for metrics without a dedicated entry.
    pub fn fallback() -> Self {
        Self {
            y_domain: Some((0.0, 10000.0)),
            stroke_color: Some(palette::CYAN_STROKE),
            stroke_color_emphasis: Some(palette::BLUE_EMPHASIS),
            ..Self::empty()
        }
    }

    fn empty() -> Self {
        Self {
            y_domain: None,
            y_axis_ticks: None,
            y_grid_ticks: None,
            y_tick_format: None,
            stroke_color: None,
            neighbor_stroke_color: None,
            stroke_color_emphasis: None,
            color: None,
            fill: None,
            short_name: None,
        }
    }

    /// Base stroke, black when unset.
    pub fn base_stroke(&self) -> Color {
        self.stroke_color.unwrap_or(Color::BLACK)
    }

    pub fn emphasis_stroke(&self) -> Color {
        self.stroke_color_emphasis.unwrap_or_else(|| self.base_stroke())
    }

    pub fn neighbor_stroke(&self) -> Color {
        self.neighbor_stroke_color.unwrap_or(Color::BLACK)
    }

    /// Tooltip formatter: the configured one, else `,.2f`.
    pub fn hint_format(&self) -> NumberFormat {
        self.y_tick_format.unwrap_or(NumberFormat::DEFAULT_HINT)
    }

    pub fn display_name<'a>(&self, metric: &'a str) -> &'a str {
        self.short_name.unwrap_or(metric)
    }
}
