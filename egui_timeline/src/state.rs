//! Persistent state of the timeline panel, kept across frames.

use egui::Shape;
use library::timeline::Timeline;

use crate::theme::TimelineTheme;

/// The timeline model plus the shapes of its last full repaint.
///
/// Background, ticks and labels only change on a full repaint, so they are
/// kept here and replayed on the other frames.
pub struct TimelineState {
    pub(crate) timeline: Timeline,
    pub(crate) static_layer: Vec<Shape>,
    pub(crate) painted_theme: Option<TimelineTheme>,
}

impl TimelineState {
    pub fn new(display_scale: f32) -> Self {
        Self {
            timeline: Timeline::new(display_scale),
            static_layer: Vec::new(),
            painted_theme: None,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.timeline
    }

    /// Number of shapes replayed from the last full repaint.
    pub fn static_shape_count(&self) -> usize {
        self.static_layer.len()
    }

    /// Forces a full repaint when the theme differs from the one last painted with.
    pub(crate) fn sync_theme(&mut self, theme: &TimelineTheme) {
        if self.painted_theme.as_ref() != Some(theme) {
            self.painted_theme = Some(theme.clone());
            self.timeline.invalidate();
        }
    }
}

impl Default for TimelineState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use library::model::{Frame, FrameRate, Output};
    use library::timeline::{FixedWidthText, OutputHost, Rect};

    #[test]
    fn theme_change_invalidates_timeline() {
        let output = Output::new(0, "clip", FrameRate::new(25, 1).unwrap(), 250);
        let host = OutputHost::new(&output, 1.0);
        let mut state = TimelineState::default();
        state.timeline.set_duration(Frame(250), output.total_time());

        let theme = TimelineTheme::default();
        state.sync_theme(&theme);
        let _ = state
            .timeline
            .render(Rect::new(0.0, 0.0, 400.0, 40.0), &host, &FixedWidthText::default());
        assert!(!state.timeline().needs_full_repaint());

        state.sync_theme(&theme);
        assert!(!state.timeline().needs_full_repaint());

        let dark = TimelineTheme {
            cursor: egui::Color32::WHITE,
            ..theme
        };
        state.sync_theme(&dark);
        assert!(state.timeline().needs_full_repaint());
    }
}
