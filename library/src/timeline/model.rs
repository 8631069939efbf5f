use log::{debug, trace, warn};
use std::time::Duration;

use crate::error::{LibraryError, Result};
use crate::model::{Frame, Value};
use crate::timeline::geometry::{Line, Point, Rect};
use crate::timeline::host::{TextMeasure, TimelineHost};
use crate::timeline::layout::TimelineLayout;
use crate::timeline::marks::{MarkPosition, TimelineMarks};
use crate::timeline::paint::{
    LabelAlign, MarkLine, Notch, NotchLabel, RepaintKind, TimelinePaint,
};
use crate::timeline::scale::{LabelFormat, TimelineScale};

/// The first label is pulled this far left of the viewport so its glyphs are not clipped.
const FIRST_LABEL_OFFSET: f32 = -2.5;

/// Half-width of the band around a bookmark line that shows its label.
const BOOKMARK_HIT_HALF_WIDTH: f32 = 0.5;

/// A cursor position, either as a frame or as elapsed time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Frame(Frame),
    Time(Duration),
}

impl From<Frame> for Position {
    fn from(value: Frame) -> Self {
        Position::Frame(value)
    }
}

impl From<Duration> for Position {
    fn from(value: Duration) -> Self {
        Position::Time(value)
    }
}

impl TryFrom<&Value> for Position {
    type Error = LibraryError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Frame(frame) => Ok(Position::Frame(*frame)),
            Value::Time(t) => Ok(Position::Time(*t)),
            other => Err(LibraryError::type_mismatch(
                "Frame or Time",
                other.type_name(),
            )),
        }
    }
}

/// Emitted when the scrollbar is pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineClick {
    pub frame: Frame,
    pub time: Duration,
}

/// Toolkit-independent state of the timeline widget.
///
/// Horizontal offsets (`cursor_x`, the results of `time_to_x` and friends) are
/// relative to the left edge of the viewport; the geometry in
/// [`TimelinePaint`] is absolute.
///
/// Two dirty flags drive [`render`](Self::render): a full repaint rebuilds
/// ticks and labels, a bookmark repaint only the bookmark and mark lines. The
/// cursor is rebuilt on every pass.
#[derive(Debug)]
pub struct Timeline {
    rect: Rect,
    prev_rect: Rect,
    total_time: Duration,
    total_frames: Frame,
    display_scale: f32,
    layout: TimelineLayout,
    cursor_x: f32,
    /// Last applied cursor position; the pixel offset is recomputed from it
    /// whenever the mapping changes.
    cursor_position: Option<Position>,
    /// Set while the viewport has no width yet.
    pending_position: Option<Position>,
    need_full_repaint: bool,
    bookmarks_changed: bool,
    redraw_requested: bool,
    marks: TimelineMarks,

    // Cached geometry.
    tick_interval: Duration,
    label_format: LabelFormat,
    notches: Vec<Notch>,
    labels: Vec<NotchLabel>,
    scroll_rect: Rect,
    bookmark_lines: Vec<MarkLine>,
    mark_lines: Vec<MarkLine>,
}

impl Timeline {
    pub fn new(display_scale: f32) -> Self {
        Self {
            rect: Rect::ZERO,
            prev_rect: Rect::ZERO,
            total_time: Duration::from_secs(1),
            total_frames: Frame(1),
            display_scale,
            layout: TimelineLayout::scaled(display_scale),
            cursor_x: 0.0,
            cursor_position: None,
            pending_position: None,
            need_full_repaint: true,
            bookmarks_changed: true,
            redraw_requested: true,
            marks: TimelineMarks::new(),
            tick_interval: Duration::from_secs(10),
            label_format: LabelFormat::MinuteSecond,
            notches: Vec::new(),
            labels: Vec::new(),
            scroll_rect: Rect::ZERO,
            bookmark_lines: Vec::new(),
            mark_lines: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn prev_rect(&self) -> Rect {
        self.prev_rect
    }

    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    pub fn total_frames(&self) -> Frame {
        self.total_frames
    }

    pub fn layout(&self) -> &TimelineLayout {
        &self.layout
    }

    pub fn cursor_x(&self) -> f32 {
        self.cursor_x
    }

    pub fn pending_position(&self) -> Option<Position> {
        self.pending_position
    }

    pub fn needs_full_repaint(&self) -> bool {
        self.need_full_repaint
    }

    pub fn bookmarks_dirty(&self) -> bool {
        self.bookmarks_changed
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn label_format(&self) -> LabelFormat {
        self.label_format
    }

    pub fn notches(&self) -> &[Notch] {
        &self.notches
    }

    pub fn labels(&self) -> &[NotchLabel] {
        &self.labels
    }

    pub fn scroll_rect(&self) -> Rect {
        self.scroll_rect
    }

    pub fn bookmark_lines(&self) -> &[MarkLine] {
        &self.bookmark_lines
    }

    pub fn mark_lines(&self) -> &[MarkLine] {
        &self.mark_lines
    }

    pub fn marks(&self) -> &TimelineMarks {
        &self.marks
    }

    /// Returns whether a redraw was requested since the last call, and resets the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    // -----------------------------------------------------------------------
    // Conversions
    // -----------------------------------------------------------------------

    fn scale(&self) -> TimelineScale {
        TimelineScale::new(self.rect.width, self.total_time)
    }

    pub fn time_to_x(&self, t: Duration) -> f32 {
        self.scale().time_to_x(t)
    }

    pub fn x_to_time(&self, x: f32) -> Duration {
        self.scale().x_to_time(x)
    }

    pub fn frame_to_x(&self, frame: Frame, host: &dyn TimelineHost) -> f32 {
        self.time_to_x(host.frame_to_time(frame))
    }

    pub fn x_to_frame(&self, x: f32, host: &dyn TimelineHost) -> Frame {
        host.time_to_frame(self.x_to_time(x))
    }

    fn position_to_x(&self, pos: Position, host: &dyn TimelineHost) -> f32 {
        match pos {
            Position::Frame(frame) => self.frame_to_x(frame, host),
            Position::Time(t) => self.time_to_x(t),
        }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    fn request_full_repaint(&mut self) {
        self.need_full_repaint = true;
        self.redraw_requested = true;
    }

    /// Replaces the totals of the active output.
    pub fn set_duration(&mut self, total_frames: Frame, total_time: Duration) {
        if total_time.is_zero() {
            warn!("Timeline duration set to zero; every position maps to the left edge");
        }
        debug!(
            "Timeline duration: {} frames, {:.3}s",
            total_frames,
            total_time.as_secs_f64()
        );
        self.total_frames = total_frames;
        self.total_time = total_time;
        self.request_full_repaint();
    }

    /// Moves the cursor. While the viewport has no width the position is kept
    /// and converted on the next render.
    pub fn set_position(&mut self, pos: impl Into<Position>, host: &dyn TimelineHost) {
        let pos = pos.into();
        if self.rect.width <= 0.0 {
            trace!("Timeline has no width yet, deferring position {:?}", pos);
            self.pending_position = Some(pos);
            return;
        }
        self.cursor_x = self.position_to_x(pos, host);
        self.cursor_position = Some(pos);
        self.redraw_requested = true;
    }

    /// [`set_position`](Self::set_position) for loosely typed callers.
    pub fn set_position_value(&mut self, value: &Value, host: &dyn TimelineHost) -> Result<()> {
        let pos = Position::try_from(value)?;
        self.set_position(pos, host);
        Ok(())
    }

    /// The host changed the bookmark list. Ticks stay cached.
    pub fn bookmarks_changed(&mut self) {
        self.bookmarks_changed = true;
        self.redraw_requested = true;
    }

    /// Marks are redrawn together with the bookmarks.
    pub fn set_marks(&mut self, marks: TimelineMarks) {
        self.marks = marks;
        self.bookmarks_changed();
    }

    pub fn set_display_scale(&mut self, display_scale: f32) {
        let display_scale = if display_scale.is_finite() && display_scale > 0.0 {
            display_scale
        } else {
            1.0
        };
        if self.display_scale == display_scale {
            return;
        }
        self.display_scale = display_scale;
        self.layout = TimelineLayout::scaled(display_scale);
        self.request_full_repaint();
    }

    /// Forces a full repaint, e.g. after a style change.
    pub fn invalidate(&mut self) {
        self.request_full_repaint();
    }

    /// Records a move or resize of the viewport.
    pub fn set_geometry(&mut self, rect: Rect) {
        if rect == self.rect {
            return;
        }
        trace!("Timeline geometry {:?} -> {:?}", self.rect, rect);
        self.prev_rect = self.rect;
        self.rect = rect;
        self.request_full_repaint();
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Runs one render pass for `viewport` and clears both dirty flags.
    pub fn render(
        &mut self,
        viewport: Rect,
        host: &dyn TimelineHost,
        text: &dyn TextMeasure,
    ) -> TimelinePaint<'_> {
        self.set_display_scale(host.display_scale());
        self.set_geometry(viewport);

        if let Some(pos) = self.pending_position.take() {
            self.set_position(pos, host);
        }

        let kind = if self.need_full_repaint {
            RepaintKind::Full
        } else if self.bookmarks_changed {
            RepaintKind::Bookmarks
        } else {
            RepaintKind::Cursor
        };
        trace!("Timeline render pass: {:?}", kind);

        if kind == RepaintKind::Full {
            if let Some(pos) = self.cursor_position {
                self.cursor_x = self.position_to_x(pos, host);
            }
            self.rebuild_notches(text);
        }
        if kind != RepaintKind::Cursor {
            self.rebuild_mark_lines(host);
        }

        let cursor_x = self.rect.left + self.cursor_x;
        let cursor = Line::vertical(
            cursor_x,
            self.scroll_rect.top,
            self.scroll_rect.bottom() - 1.0,
        );

        self.need_full_repaint = false;
        self.bookmarks_changed = false;
        self.redraw_requested = false;

        let full = kind == RepaintKind::Full;
        TimelinePaint {
            kind,
            background: full.then_some(self.rect),
            notches: full.then_some(self.notches.as_slice()),
            labels: full.then_some(self.labels.as_slice()),
            scroll_rect: self.scroll_rect,
            bookmarks: &self.bookmark_lines,
            marks: &self.mark_lines,
            cursor,
        }
    }

    fn rebuild_notches(&mut self, text: &dyn TextMeasure) {
        let scale = self.scale();
        let interval = scale.tick_interval(self.layout.tick_spacing_target);
        let format = LabelFormat::for_interval(interval);
        self.tick_interval = interval;
        self.label_format = format;

        let bottom = self.layout.tick_bottom(self.rect.top);
        let top = bottom - self.layout.tick_height;

        self.notches.clear();
        let mut t = Duration::ZERO;
        let mut x = 0.0_f32;
        while x < self.rect.width && t < self.total_time {
            let abs_x = self.rect.left + x;
            self.notches.push(Notch {
                line: Line::vertical(abs_x, top, bottom),
                time: t,
            });
            t += interval;
            x = scale.time_to_x(t);
        }

        self.scroll_rect = Rect::new(
            self.rect.left,
            bottom + self.layout.scroll_gap,
            self.rect.width,
            self.layout.scroll_height,
        );

        self.labels = self.place_labels(format, text);
        debug!(
            "Timeline ticks rebuilt: {} ticks every {}s",
            self.notches.len(),
            interval.as_secs()
        );
    }

    fn place_labels(&self, format: LabelFormat, text: &dyn TextMeasure) -> Vec<NotchLabel> {
        let font_height = self.layout.font_height;
        let last = self.notches.len().saturating_sub(1);

        self.notches
            .iter()
            .enumerate()
            .map(|(i, notch)| {
                let label = format.format(notch.time);
                let width = text.text_width(&label, font_height);
                let anchor_x = notch.line.x();
                let anchor_y = notch.line.start.y - self.layout.label_gap;
                let boxed = |left: f32| Rect::new(left, anchor_y - font_height, width, font_height);

                let (rect, align) = if i == 0 {
                    (boxed(self.rect.left + FIRST_LABEL_OFFSET), LabelAlign::Left)
                } else {
                    let centered = boxed(anchor_x - width / 2.0);
                    if i == last && centered.right() > self.rect.right() {
                        (boxed(anchor_x - width), LabelAlign::Right)
                    } else {
                        (centered, LabelAlign::Center)
                    }
                };

                NotchLabel {
                    text: label,
                    rect,
                    align,
                }
            })
            .collect()
    }

    fn rebuild_mark_lines(&mut self, host: &dyn TimelineHost) {
        let top = self.scroll_rect.top;
        let bottom = self.scroll_rect.bottom() - 1.0;
        let left = self.rect.left;

        self.bookmark_lines = host
            .bookmarks()
            .iter()
            .map(|bookmark| {
                let x = left + self.frame_to_x(bookmark.frame, host);
                MarkLine {
                    line: Line::vertical(x, top, bottom),
                    color: None,
                    label: bookmark.label.clone(),
                }
            })
            .collect();

        self.mark_lines = self
            .marks
            .iter()
            .map(|mark| {
                let x = left
                    + match mark.position() {
                        MarkPosition::Frame(frame) => self.frame_to_x(frame, host),
                        MarkPosition::Time(t) => self.time_to_x(t),
                    };
                MarkLine {
                    line: Line::vertical(x, top, bottom),
                    color: Some(mark.color),
                    label: mark.label.clone(),
                }
            })
            .collect();
    }

    // -----------------------------------------------------------------------
    // Pointer
    // -----------------------------------------------------------------------

    /// Handles a press at `pos`. Only presses inside the scrollbar move the
    /// cursor and produce a click.
    pub fn pointer_pressed(
        &mut self,
        pos: Point,
        host: &dyn TimelineHost,
    ) -> Option<TimelineClick> {
        if !self.scroll_rect.contains(pos) {
            return None;
        }
        let x = pos.x - self.rect.left;
        let click = TimelineClick {
            frame: self.x_to_frame(x, host),
            time: self.x_to_time(x),
        };
        self.cursor_x = x;
        self.cursor_position = Some(Position::Time(click.time));
        self.redraw_requested = true;

        debug!("Timeline clicked at frame {}", click.frame);
        Some(click)
    }

    /// Label of the first bookmark whose line is under `pos`, if any.
    pub fn hint_at(&self, pos: Point) -> Option<&str> {
        self.bookmark_lines
            .iter()
            .find(|b| (b.line.x() - pos.x).abs() <= BOOKMARK_HIT_HALF_WIDTH)
            .map(|b| b.label.as_str())
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(1.0)
    }
}
