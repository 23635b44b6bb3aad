// File: crates/rt-core/src/legend.rs
// Summary: Legend descriptor injected into a chart instead of per-chart overrides.

use crate::color::{palette, Color};
use crate::config::SeriesConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    pub color: Color,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Legend {
    pub rows: Vec<LegendRow>,
}

impl Legend {
    pub fn row(mut self, color: Color, label: impl Into<String>) -> Self {
        self.rows.push(LegendRow { color, label: label.into() });
        self
    }

    /// One row naming the metric in its emphasis colour.
    pub fn for_metric(metric: &str, config: &SeriesConfig) -> Self {
        Legend::default().row(config.emphasis_stroke(), config.display_name(metric))
    }

    pub fn test_adjusted() -> Self {
        Legend::default()
            .row(palette::CASES_FILL, "Cases")
            .row(palette::FITTED_CASES, "Fitted Cases")
            .row(palette::INFECTIONS, "Infections")
    }
}
