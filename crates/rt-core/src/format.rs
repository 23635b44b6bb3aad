// File: crates/rt-core/src/format.rs
// Summary: Value and date formatters for axis ticks and tooltip lines.

use chrono::NaiveDate;

/// Number formats used by the metric configs (d3-format equivalents noted per variant).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberFormat {
    /// `.0%`: multiply by 100, fixed decimals, percent sign.
    Percent { precision: usize },
    /// `.2s`: round to significant digits, SI prefix.
    SiPrefix { significant: usize },
    /// `,.2f`: fixed decimals, optional thousands grouping.
    Fixed { precision: usize, grouped: bool },
}

impl NumberFormat {
    /// Fallback used by tooltips when a metric has no configured format.
    pub const DEFAULT_HINT: NumberFormat = NumberFormat::Fixed { precision: 2, grouped: true };

    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return if value.is_nan() {
                "NaN".to_string()
            } else if value.is_sign_positive() {
                "Infinity".to_string()
            } else {
                "-Infinity".to_string()
            };
        }
        match *self {
            NumberFormat::Percent { precision } => format!("{:.*}%", precision, value * 100.0),
            NumberFormat::SiPrefix { significant } => format_si(value, significant.max(1)),
            NumberFormat::Fixed { precision, grouped } => {
                let s = format!("{value:.precision$}");
                if grouped { group_thousands(&s) } else { s }
            }
        }
    }
}

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

fn format_si(value: f64, significant: usize) -> String {
    if value == 0.0 {
        return format!("{:.*}", significant - 1, 0.0);
    }
    let exponent = |v: f64| v.abs().log10().floor() as i32;
    // Round first so 999 -> 1.0k rather than 999.
    let e = exponent(value);
    let step = 10f64.powi(e - significant as i32 + 1);
    let rounded = (value / step).round() * step;
    let e = exponent(rounded);
    let prefix_exp = (e.div_euclid(3) * 3).clamp(-24, 24);
    let scaled = rounded / 10f64.powi(prefix_exp);
    let decimals = (significant as i32 - 1 - (e - prefix_exp)).max(0) as usize;
    let prefix = SI_PREFIXES[((prefix_exp + 24) / 3) as usize];
    format!("{scaled:.decimals$}{prefix}")
}

fn group_thousands(s: &str) -> String {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int, frac) = match digits.find('.') {
        Some(dot) => digits.split_at(dot),
        None => (digits, ""),
    };
    let mut out = String::with_capacity(s.len() + int.len() / 3);
    out.push_str(sign);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(frac);
    out
}

/// `M/d`, no zero padding (e.g. `3/7`).
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d").to_string()
}
