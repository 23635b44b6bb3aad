// File: crates/rt-core/src/encode.rs
// Summary: Opacity ramp, emphasis and stroke assignment for overlaid series.

use crate::config::SeriesConfig;
use crate::series::SeriesStyle;

/// Steepness of the logistic opacity ramp.
pub const LOGIT_K: f64 = 12.0;
/// Midpoint of the ramp in normalised index space.
pub const LOGIT_T0: f64 = 0.7;

pub const EMPHASIS_STROKE_WIDTH: f64 = 4.0;
pub const STROKE_WIDTH: f64 = 2.0;
pub const NEIGHBOR_STROKE_WIDTH: f64 = 1.5;
pub const NEIGHBOR_OPACITY: f64 = 0.4;

/// Which overlays are switched on for a results chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayMode {
    pub show_neighbors: bool,
    pub show_history: bool,
}

impl OverlayMode {
    pub fn single() -> Self {
        Self::default()
    }

    pub fn is_single(&self) -> bool {
        !self.show_neighbors && !self.show_history
    }
}

/// `1 / (1 + exp(-k (t - t0)))`.
pub fn logit_scale(k: f64, t0: f64, t: f64) -> f64 {
    1.0 / (1.0 + (-k * (t - t0)).exp())
}

/// Index `i` of `n` mapped into [0, 1]. A single series is index 0 of 1.
pub fn normalized_index(i: usize, n: usize) -> f64 {
    i as f64 / n.saturating_sub(1).max(1) as f64
}

pub fn opacity(i: usize, n: usize) -> f64 {
    logit_scale(LOGIT_K, LOGIT_T0, normalized_index(i, n))
}

/// Turns an ordered (oldest -> newest) set of series into per-series styles.
#[derive(Clone, Debug)]
pub struct VisualEncoder<'a> {
    config: &'a SeriesConfig,
}

impl<'a> VisualEncoder<'a> {
    pub fn new(config: &'a SeriesConfig) -> Self {
        Self { config }
    }

    /// Index of the emphasised series, `None` when there are no series.
    pub fn emphasized(n: usize) -> Option<usize> {
        n.checked_sub(1)
    }

    pub fn style(&self, i: usize, n: usize) -> SeriesStyle {
        let emphasized = Self::emphasized(n) == Some(i);
        let (color, width) = if emphasized {
            (self.config.emphasis_stroke(), EMPHASIS_STROKE_WIDTH)
        } else {
            (self.config.base_stroke(), STROKE_WIDTH)
        };
        SeriesStyle::line(color, opacity(i, n), width)
    }

    pub fn encode(&self, n: usize) -> Vec<SeriesStyle> {
        (0..n).map(|i| self.style(i, n)).collect()
    }

    /// Neighbor overlay lines: fixed translucency, thin dashed stroke.
    pub fn neighbor_style(&self) -> SeriesStyle {
        SeriesStyle::line(self.config.neighbor_stroke(), NEIGHBOR_OPACITY, NEIGHBOR_STROKE_WIDTH).dashed()
    }

    /// Whether hover on series `i` of `n` feeds the tooltip.
    pub fn drives_selection(i: usize, n: usize, mode: OverlayMode) -> bool {
        mode.is_single() && Self::emphasized(n) == Some(i)
    }
}
