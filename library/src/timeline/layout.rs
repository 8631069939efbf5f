/// Layout constants in logical pixels, scaled by the host's display scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineLayout {
    /// Preferred distance between two ticks.
    pub tick_spacing_target: f32,
    pub tick_height: f32,
    pub font_height: f32,
    /// Vertical gap between a label's bottom and its tick. Negative values overlap.
    pub label_gap: f32,
    /// Gap between the tick row and the scrollbar.
    pub scroll_gap: f32,
    pub scroll_height: f32,
    pub min_height: f32,
}

/// Fixed padding below the label row.
const TICK_PADDING: f32 = 5.0;

impl TimelineLayout {
    pub fn scaled(display_scale: f32) -> Self {
        let scale = if display_scale.is_finite() && display_scale > 0.0 {
            display_scale
        } else {
            1.0
        };
        let px = |v: f32| (v * scale).round();
        Self {
            tick_spacing_target: px(50.0),
            tick_height: px(6.0),
            font_height: px(10.0),
            label_gap: px(-1.0),
            scroll_gap: px(2.0),
            scroll_height: px(10.0),
            min_height: px(33.0),
        }
    }

    /// Smallest useful widget size: one tick interval wide.
    pub fn min_size(&self) -> (f32, f32) {
        (self.tick_spacing_target, self.min_height)
    }

    /// Y of the tick's lower end for a viewport starting at `top`.
    pub fn tick_bottom(&self, top: f32) -> f32 {
        top + self.font_height + self.label_gap + self.tick_height + TICK_PADDING
    }
}

impl Default for TimelineLayout {
    fn default() -> Self {
        Self::scaled(1.0)
    }
}
