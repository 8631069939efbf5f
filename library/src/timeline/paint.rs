//! Geometry produced by a render pass, ready to be painted by a toolkit.

use std::time::Duration;

use crate::model::Color;
use crate::timeline::geometry::{Line, Rect};

/// A tick on the ruler and the time it stands for.
#[derive(Clone, Debug, PartialEq)]
pub struct Notch {
    pub line: Line,
    pub time: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAlign {
    Left,
    Center,
    Right,
}

/// Text of a tick label and the box it occupies. The box bottom sits on the anchor point.
#[derive(Clone, Debug, PartialEq)]
pub struct NotchLabel {
    pub text: String,
    pub rect: Rect,
    pub align: LabelAlign,
}

/// A vertical line across the scrollbar for a bookmark or a timeline mark.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkLine {
    pub line: Line,
    /// `None` for bookmarks, which use the theme's bookmark color.
    pub color: Option<Color>,
    pub label: String,
}

/// What a render pass had to recompute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepaintKind {
    /// Background, ticks, labels, bookmarks and cursor.
    Full,
    /// Bookmark and mark lines plus the cursor; ticks are unchanged.
    Bookmarks,
    /// Only the cursor moved.
    Cursor,
}

/// Output of [`Timeline::render`](crate::timeline::Timeline::render).
///
/// Layers that were not recomputed are `None`; a retained-mode painter keeps
/// what it drew for them last time.
#[derive(Clone, Debug)]
pub struct TimelinePaint<'a> {
    pub kind: RepaintKind,
    pub background: Option<Rect>,
    pub notches: Option<&'a [Notch]>,
    pub labels: Option<&'a [NotchLabel]>,
    pub scroll_rect: Rect,
    pub bookmarks: &'a [MarkLine],
    pub marks: &'a [MarkLine],
    pub cursor: Line,
}

impl TimelinePaint<'_> {
    pub fn is_full(&self) -> bool {
        self.kind == RepaintKind::Full
    }
}
