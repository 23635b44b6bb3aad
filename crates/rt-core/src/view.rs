// File: crates/rt-core/src/view.rs
// Summary: Interactive view state: the brushed time window and the hovered point.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::record::RawRecord;

/// Horizontal window selected by a brush gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub left: DateTime<Utc>,
    pub right: DateTime<Utc>,
}

impl Viewport {
    /// Build from brush endpoints in either order.
    pub fn new(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        if a <= b {
            Self { left: a, right: b }
        } else {
            Self { left: b, right: a }
        }
    }

    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.left <= t && t <= self.right
    }
}

/// Viewport shared by a results chart and its paired input chart.
///
/// Clones observe the same cell, so a brush on either chart moves both. Only
/// the brush-end handler writes; every redraw reads. Vertical domains are
/// never derived from it.
#[derive(Clone, Debug, Default)]
pub struct SharedViewport {
    cell: Rc<Cell<Option<Viewport>>>,
}

impl SharedViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Viewport> {
        self.cell.get()
    }

    /// Brush-end event from the renderer: `unset | set -> set(left, right)`.
    pub fn brush_end(&self, left: DateTime<Utc>, right: DateTime<Utc>) {
        let vp = Viewport::new(left, right);
        tracing::trace!(left = %vp.left, right = %vp.right, "viewport brushed");
        self.cell.set(Some(vp));
    }

    /// Time domain to draw: the brushed window, else `full`.
    pub fn x_domain(&self, full: Option<(DateTime<Utc>, DateTime<Utc>)>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match self.get() {
            Some(vp) => Some((vp.left, vp.right)),
            None => full,
        }
    }
}

/// Hovered data point feeding the tooltip: `none -> point-selected -> none`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Selection {
    #[default]
    None,
    Selected(RawRecord),
}

impl Selection {
    /// Nearest-point hover event.
    pub fn hover(&mut self, record: RawRecord) {
        *self = Selection::Selected(record);
    }

    pub fn mouse_leave(&mut self) {
        *self = Selection::None;
    }

    pub fn selected(&self) -> Option<&RawRecord> {
        match self {
            Selection::Selected(r) => Some(r),
            Selection::None => None,
        }
    }
}
