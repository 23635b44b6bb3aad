// File: crates/rt-core/src/axis.rs
// Summary: Axis descriptors emitted per frame (y domain, ticks, tick labels).

use chrono::{DateTime, Utc};

use crate::config::SeriesConfig;
use crate::format::{short_date, NumberFormat};

/// Vertical axis. Zoom never touches it.
#[derive(Clone, Debug, PartialEq)]
pub struct YAxis {
    /// `None` = renderer autoscales.
    pub domain: Option<(f64, f64)>,
    pub ticks: Option<Vec<f64>>,
    pub grid_ticks: Option<Vec<f64>>,
    pub format: Option<NumberFormat>,
    /// Tick count hint when `ticks` is unset.
    pub tick_total: usize,
}

impl YAxis {
    pub fn from_config(config: &SeriesConfig) -> Self {
        Self {
            domain: config.y_domain,
            ticks: config.y_axis_ticks.clone(),
            grid_ticks: config.y_grid_ticks.clone(),
            format: config.y_tick_format,
            tick_total: 3,
        }
    }

    /// Labels for `ticks`; unformatted ticks use the shortest float repr.
    pub fn tick_labels(&self) -> Vec<String> {
        self.ticks
            .iter()
            .flatten()
            .map(|&t| match self.format {
                Some(f) => f.format(t),
                None => t.to_string(),
            })
            .collect()
    }
}

/// Time axis tick label (`M/d`).
pub fn x_tick_label(t: DateTime<Utc>) -> String {
    short_date(t.date_naive())
}
