//! Colors used by the timeline panel.

use egui::Color32;

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineTheme {
    /// Fill behind the ruler.
    pub background: Color32,
    /// Tick lines and labels.
    pub text: Color32,
    pub scroll_background: Color32,
    pub bookmark: Color32,
    pub cursor: Color32,
}

impl TimelineTheme {
    /// Takes background and text colors from the current egui style.
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        Self {
            background: visuals.panel_fill,
            text: visuals.text_color(),
            ..Self::default()
        }
    }
}

impl Default for TimelineTheme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(27, 27, 27),
            text: Color32::from_rgb(200, 200, 200),
            scroll_background: Color32::from_rgb(160, 160, 164),
            bookmark: Color32::from_rgb(0, 128, 0),
            cursor: Color32::BLACK,
        }
    }
}

pub fn to_color32(color: library::Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}
