//! Pure conversions between elapsed time and horizontal pixel offsets, and the
//! tick spacing / label format choices derived from them.

use std::time::Duration;

use crate::model::time::{format_duration, from_seconds};

/// Candidate tick intervals in seconds, finest first.
pub const TICK_INTERVALS_SECS: [u64; 4] = [10, 30, 60, 120];

/// Ticks may end up to 20% closer than the target spacing before the next
/// coarser interval is used.
pub const TICK_MARGIN: f64 = 1.2;

/// Linear mapping of `0..=total_time` onto `0..=width` pixels.
///
/// Offsets are relative to the left edge of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineScale {
    pub width: f32,
    pub total_time: Duration,
}

impl TimelineScale {
    pub fn new(width: f32, total_time: Duration) -> Self {
        Self { width, total_time }
    }

    /// `round(t / total * width)`. A zero total duration maps everything to 0.
    pub fn time_to_x(&self, t: Duration) -> f32 {
        let total = self.total_time.as_secs_f64();
        if total <= 0.0 {
            return 0.0;
        }
        (t.as_secs_f64() / total * self.width as f64).round() as f32
    }

    /// `x * total / width`. A zero width maps everything to zero; callers
    /// defer conversions until the width is known.
    pub fn x_to_time(&self, x: f32) -> Duration {
        if self.width <= 0.0 {
            return Duration::ZERO;
        }
        from_seconds(x as f64 * self.total_time.as_secs_f64() / self.width as f64)
    }

    /// Tick interval for ticks roughly `target_x` pixels apart.
    pub fn tick_interval(&self, target_x: f32) -> Duration {
        select_tick_interval(self.x_to_time(target_x).as_secs_f64())
    }
}

/// Picks the smallest interval `c` with `seconds < c * 1.2`, falling back to the coarsest.
pub fn select_tick_interval(seconds: f64) -> Duration {
    let secs = TICK_INTERVALS_SECS
        .iter()
        .copied()
        .find(|&candidate| seconds < candidate as f64 * TICK_MARGIN)
        .unwrap_or(TICK_INTERVALS_SECS[TICK_INTERVALS_SECS.len() - 1]);
    Duration::from_secs(secs)
}

/// How tick labels are printed. Depends on the interval only, never on the tick value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelFormat {
    /// `h:MM`, for intervals of an hour or more.
    HourMinute,
    /// `m:00`, for whole-minute intervals.
    MinuteZero,
    /// `m:SS`.
    MinuteSecond,
}

impl LabelFormat {
    pub fn for_interval(interval: Duration) -> Self {
        if interval >= Duration::from_secs(3600) {
            LabelFormat::HourMinute
        } else if interval >= Duration::from_secs(60) {
            LabelFormat::MinuteZero
        } else {
            LabelFormat::MinuteSecond
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            LabelFormat::HourMinute => "%h:%M",
            LabelFormat::MinuteZero => "%m:00",
            LabelFormat::MinuteSecond => "%m:%S",
        }
    }

    pub fn format(&self, t: Duration) -> String {
        format_duration(t, self.pattern())
    }
}
