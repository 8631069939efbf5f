//! Conversions between timeline geometry and egui shapes.

use egui::{Color32, FontId, Pos2, Shape, Stroke};
use library::timeline::{Line, NotchLabel, Point, Rect, TextMeasure};

pub fn to_egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        Pos2::new(rect.left, rect.top),
        Pos2::new(rect.right(), rect.bottom()),
    )
}

pub fn from_egui_rect(rect: egui::Rect) -> Rect {
    Rect::new(rect.min.x, rect.min.y, rect.width(), rect.height())
}

pub fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

pub fn line_shape(line: Line, color: Color32) -> Shape {
    Shape::line_segment(
        [
            Pos2::new(line.start.x, line.start.y),
            Pos2::new(line.end.x, line.end.y),
        ],
        Stroke::new(1.0, color),
    )
}

/// A label laid out inside its box, bottom-aligned.
pub fn label_shape(painter: &egui::Painter, label: &NotchLabel, font: FontId, color: Color32) -> Shape {
    let galley = painter.layout_no_wrap(label.text.clone(), font, color);
    let pos = Pos2::new(label.rect.left, label.rect.bottom() - galley.size().y);
    Shape::galley(pos, galley, color)
}

/// Measures label text with the painter's fonts.
pub struct PainterText<'a> {
    pub painter: &'a egui::Painter,
}

impl TextMeasure for PainterText<'_> {
    fn text_width(&self, text: &str, font_height: f32) -> f32 {
        self.painter
            .layout_no_wrap(
                text.to_string(),
                FontId::proportional(font_height),
                Color32::PLACEHOLDER,
            )
            .size()
            .x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_conversion_round_trips() {
        let rect = Rect::new(4.0, 8.0, 120.0, 33.0);
        let egui_rect = to_egui_rect(rect);
        assert_eq!(egui_rect.min, Pos2::new(4.0, 8.0));
        assert_eq!(egui_rect.max, Pos2::new(124.0, 41.0));
        assert_eq!(from_egui_rect(egui_rect), rect);
    }
}
