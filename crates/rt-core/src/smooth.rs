// File: crates/rt-core/src/smooth.rs
// Summary: Fixed-window simple moving average with zero padding.

use chrono::NaiveDate;

use crate::record::RawRecord;

/// Window used by the raw-input charts (one week of daily data).
pub const SMOOTHING_WINDOW: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Moving average over `window` elements.
///
/// The output always has the input's length: the first `window - 1` slots,
/// where no full window exists yet, are `0.0`. Consumers zip this against the
/// input dates, so neither truncation nor `NaN` padding is acceptable. A window
/// of 0 behaves like 1.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let p = window.max(1);
    (0..values.len())
        .map(|i| {
            if i + 1 < p {
                return 0.0;
            }
            // Each window is summed on its own; a NaN only reaches the windows containing it.
            values[i + 1 - p..=i].iter().sum::<f64>() / p as f64
        })
        .collect()
}

/// Smooth `metric` across `records`, keeping each record's date. Records
/// missing the metric count as 0.
pub fn smooth_records(records: &[RawRecord], metric: &str, window: usize) -> Vec<SmoothedPoint> {
    let values: Vec<f64> = records.iter().map(|r| r.value(metric).unwrap_or(0.0)).collect();
    records
        .iter()
        .zip(moving_average(&values, window))
        .map(|(r, value)| SmoothedPoint { date: r.date, value })
        .collect()
}
