// File: crates/rt-core/src/series.rs
// Summary: Render-ready series: points plus the style parameters the renderer needs.

use chrono::{DateTime, Utc};

use crate::color::Color;
use crate::record::{date_to_instant, RawRecord};
use crate::smooth::SmoothedPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    /// Filled area down to zero.
    Area,
    /// Vertical bars; `bar_width` in the style is a fraction of the slot.
    Bars,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeDash {
    Solid,
    Dashed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub color: Color,
    pub fill: Option<Color>,
    pub opacity: f64,
    /// Pixels.
    pub stroke_width: f64,
    pub dash: StrokeDash,
    pub bar_width: Option<f64>,
}

impl SeriesStyle {
    pub fn line(color: Color, opacity: f64, stroke_width: f64) -> Self {
        Self { color, fill: None, opacity, stroke_width, dash: StrokeDash::Solid, bar_width: None }
    }

    pub fn dashed(mut self) -> Self {
        self.dash = StrokeDash::Dashed;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: DateTime<Utc>,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub points: Vec<Point>,
    pub style: SeriesStyle,
}

impl Series {
    /// Build from records; rows lacking `metric` are skipped.
    pub fn from_records(
        name: impl Into<String>,
        kind: SeriesKind,
        records: &[RawRecord],
        metric: &str,
        style: SeriesStyle,
    ) -> Self {
        let points = records
            .iter()
            .filter_map(|r| r.value(metric).map(|y| Point { x: r.instant(), y }))
            .collect();
        Self { name: name.into(), kind, points, style }
    }

    pub fn from_smoothed(name: impl Into<String>, smoothed: &[SmoothedPoint], style: SeriesStyle) -> Self {
        let points = smoothed
            .iter()
            .map(|p| Point { x: date_to_instant(p.date), y: p.value })
            .collect();
        Self { name: name.into(), kind: SeriesKind::Line, points, style }
    }

    /// Time extent of the points, if any.
    pub fn x_extent(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.points.first()?.x;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| (lo.min(p.x), hi.max(p.x))))
    }
}
