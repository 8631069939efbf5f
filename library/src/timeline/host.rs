//! What the timeline needs from the window that hosts it.

use std::time::Duration;

use crate::model::{Bookmark, Frame, Output};

/// Read-only services provided by the host window.
///
/// Frame/time conversions are always delegated here because the frame rate
/// belongs to the active output and may be non-integral.
pub trait TimelineHost {
    /// Scale factor applied to all layout constants.
    fn display_scale(&self) -> f32;

    /// Bookmarks of the active output, in display order.
    fn bookmarks(&self) -> &[Bookmark];

    fn frame_to_time(&self, frame: Frame) -> Duration;

    fn time_to_frame(&self, t: Duration) -> Frame;
}

/// Text metrics needed to place tick labels.
pub trait TextMeasure {
    /// Width of `text` rendered at `font_height` pixels.
    fn text_width(&self, text: &str, font_height: f32) -> f32;
}

/// Approximates every glyph as `ratio * font_height` wide. Used for headless rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedWidthText {
    pub ratio: f32,
}

impl Default for FixedWidthText {
    fn default() -> Self {
        Self { ratio: 0.6 }
    }
}

impl TextMeasure for FixedWidthText {
    fn text_width(&self, text: &str, font_height: f32) -> f32 {
        text.chars().count() as f32 * font_height * self.ratio
    }
}

/// Hosts a timeline over a single [`Output`].
#[derive(Clone, Copy, Debug)]
pub struct OutputHost<'a> {
    output: &'a Output,
    display_scale: f32,
}

impl<'a> OutputHost<'a> {
    pub fn new(output: &'a Output, display_scale: f32) -> Self {
        Self {
            output,
            display_scale,
        }
    }

    pub fn output(&self) -> &'a Output {
        self.output
    }
}

impl TimelineHost for OutputHost<'_> {
    fn display_scale(&self) -> f32 {
        self.display_scale
    }

    fn bookmarks(&self) -> &[Bookmark] {
        &self.output.bookmarks
    }

    fn frame_to_time(&self, frame: Frame) -> Duration {
        self.output.frame_to_time(frame)
    }

    fn time_to_frame(&self, t: Duration) -> Frame {
        self.output.time_to_frame(t)
    }
}
