//! Timeline panel widget.

use egui::{FontId, PointerButton, Sense, Shape, Stroke, StrokeKind};
use library::timeline::{TimelineClick, TimelineHost};
use log::trace;

use crate::drawing::{self, PainterText};
use crate::state::TimelineState;
use crate::theme::{TimelineTheme, to_color32};

/// What happened in the panel this frame.
pub struct TimelineResponse {
    pub response: egui::Response,
    /// Set when the scrollbar was pressed, or dragged horizontally.
    pub clicked: Option<TimelineClick>,
    /// Label of the bookmark under the pointer.
    pub hint: Option<String>,
}

pub struct TimelineWidget<'a> {
    state: &'a mut TimelineState,
    theme: &'a TimelineTheme,
}

impl<'a> TimelineWidget<'a> {
    pub fn new(state: &'a mut TimelineState, theme: &'a TimelineTheme) -> Self {
        Self { state, theme }
    }

    /// Paints the panel across the available width and handles pointer input.
    pub fn show(self, ui: &mut egui::Ui, host: &dyn TimelineHost) -> TimelineResponse {
        let TimelineWidget { state, theme } = self;
        state.sync_theme(theme);

        let (min_width, min_height) = state.timeline.layout().min_size();
        let desired = egui::vec2(ui.available_width().max(min_width), min_height);
        let (response, painter) = ui.allocate_painter(desired, Sense::click_and_drag());

        let viewport = drawing::from_egui_rect(response.rect);
        let text = PainterText { painter: &painter };
        let font = FontId::proportional(state.timeline.layout().font_height);
        let paint = state.timeline.render(viewport, host, &text);

        if paint.is_full() {
            let layer = &mut state.static_layer;
            layer.clear();
            if let Some(background) = paint.background {
                layer.push(Shape::rect_filled(
                    drawing::to_egui_rect(background),
                    0.0,
                    theme.background,
                ));
            }
            for notch in paint.notches.unwrap_or_default() {
                layer.push(drawing::line_shape(notch.line, theme.text));
            }
            for label in paint.labels.unwrap_or_default() {
                layer.push(drawing::label_shape(&painter, label, font.clone(), theme.text));
            }
            trace!("Timeline static layer rebuilt with {} shapes", layer.len());
        }
        painter.extend(state.static_layer.iter().cloned());

        let scroll = drawing::to_egui_rect(paint.scroll_rect);
        painter.rect_filled(scroll, 0.0, theme.scroll_background);
        for mark in paint.bookmarks {
            painter.add(drawing::line_shape(mark.line, theme.bookmark));
        }
        for mark in paint.marks {
            let color = mark.color.map(to_color32).unwrap_or(theme.bookmark);
            painter.add(drawing::line_shape(mark.line, color));
        }
        painter.rect_stroke(scroll, 0.0, Stroke::new(1.0, theme.text), StrokeKind::Inside);
        painter.add(drawing::line_shape(paint.cursor, theme.cursor));

        let pressed = ui.input(|i| i.pointer.primary_pressed()) && response.contains_pointer();
        // A held but stationary drag must not repeat the last click.
        let dragging =
            response.dragged_by(PointerButton::Primary) && response.drag_delta().x != 0.0;
        let mut clicked = None;
        if pressed || dragging {
            let pos = response
                .interact_pointer_pos()
                .or_else(|| ui.input(|i| i.pointer.interact_pos()));
            if let Some(pos) = pos {
                clicked = state.timeline.pointer_pressed(drawing::to_point(pos), host);
            }
        }
        if state.timeline.take_redraw_request() {
            ui.ctx().request_repaint();
        }

        let hint = response
            .hover_pos()
            .and_then(|pos| state.timeline.hint_at(drawing::to_point(pos)))
            .map(str::to_string);
        let response = match &hint {
            Some(label) if !label.is_empty() => response.on_hover_text(label.as_str()),
            _ => response,
        };

        TimelineResponse {
            response,
            clicked,
            hint,
        }
    }
}
