// File: crates/rt-core/src/color.rs
// Summary: RGBA colour value handed to the renderer, plus the fixed chart palette.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in [0, 1], CSS convention.
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// Colours shared by every chart, independent of the metric.
pub mod palette {
    use super::Color;

    pub const RT_STROKE: Color = Color::GRAY;
    pub const RT_NEIGHBOR: Color = Color::rgb(56, 21, 105);
    pub const RT_EMPHASIS: Color = Color::rgb(234, 99, 255);
    pub const CYAN_STROKE: Color = Color::rgb(56, 230, 252);
    pub const BLUE_EMPHASIS: Color = Color::rgba(0, 145, 255, 1.0);
    pub const PEI_BACKDROP: Color = Color::rgb(235, 235, 240);
    pub const SMOOTHED_LINE: Color = Color::rgb(179, 109, 25);
    pub const CASES_BAR: Color = Color::rgba(50, 50, 0, 0.0);
    pub const CASES_FILL: Color = Color::rgba(50, 50, 0, 0.5);
    pub const DEATHS_BAR: Color = Color::rgba(50, 50, 0, 1.0);
    pub const FITTED_CASES: Color = Color::rgb(40, 118, 191);
    pub const INFECTIONS: Color = Color::rgb(234, 99, 255);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.a - 1.0).abs() < f32::EPSILON {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unrecognised colour `{0}`")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `rgb(r, g, b)`, `rgba(r, g, b, a)` and a few CSS names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseColorError(s.to_string());
        match s.to_ascii_lowercase().as_str() {
            "black" => return Ok(Color::BLACK),
            "gray" | "grey" => return Ok(Color::GRAY),
            "white" => return Ok(Color::WHITE),
            _ => {}
        }
        let (body, with_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(err());
        };
        let body = body.strip_suffix(')').ok_or_else(err)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(err());
        }
        let channel = |p: &str| p.parse::<u8>().map_err(|_| err());
        let a = if with_alpha {
            parts[3].parse::<f32>().map_err(|_| err())?.clamp(0.0, 1.0)
        } else {
            1.0
        };
        Ok(Color::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, a))
    }
}
