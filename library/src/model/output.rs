use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::error::{LibraryError, Result};
use crate::model::Frame;
use crate::timeline::TimelineMarks;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Rational frame rate, `num / den` frames per second.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRate {
    pub num: u64,
    pub den: u64,
}

impl FrameRate {
    pub fn new(num: u64, den: u64) -> Result<Self> {
        if num == 0 || den == 0 {
            return Err(LibraryError::InvalidArgument(format!(
                "frame rate {}/{} must have a non-zero numerator and denominator",
                num, den
            )));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Start time of `frame`, rounded up to the nanosecond so that
    /// `time_to_frame(frame_to_time(f)) == f`.
    /// Saturates at `u64::MAX` nanoseconds.
    pub fn frame_to_time(&self, frame: Frame) -> Duration {
        let nanos = (frame.index() as u128)
            .checked_mul(self.den as u128)
            .and_then(|v| v.checked_mul(NANOS_PER_SECOND))
            .map(|scaled| scaled.div_ceil(self.num as u128))
            .and_then(|nanos| u64::try_from(nanos).ok())
            .unwrap_or(u64::MAX);
        Duration::from_nanos(nanos)
    }

    /// Frame being displayed at `t`. Saturates at `u64::MAX`.
    pub fn time_to_frame(&self, t: Duration) -> Frame {
        let frames = t
            .as_nanos()
            .checked_mul(self.num as u128)
            .map(|scaled| scaled / (self.den as u128 * NANOS_PER_SECOND))
            .and_then(|frames| u64::try_from(frames).ok())
            .unwrap_or(u64::MAX);
        Frame(frames)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{} fps", self.num)
        } else {
            write!(f, "{:.3} fps", self.as_f64())
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Bookmark {
    pub frame: Frame,
    #[serde(default)]
    pub label: String,
}

impl Bookmark {
    pub fn new(frame: Frame, label: impl Into<String>) -> Self {
        Self {
            frame,
            label: label.into(),
        }
    }
}

/// One output node of the loaded script.
#[derive(Clone, Debug, PartialEq)]
pub struct Output {
    pub index: usize,
    pub name: String,
    pub fps: FrameRate,
    pub total_frames: u64,
    pub current_frame: Frame,
    /// Sorted by frame, at most one per frame.
    pub bookmarks: Vec<Bookmark>,
    pub marks: TimelineMarks,
}

impl Output {
    pub fn new(index: usize, name: impl Into<String>, fps: FrameRate, total_frames: u64) -> Self {
        Self {
            index,
            name: name.into(),
            fps,
            total_frames,
            current_frame: Frame::ZERO,
            bookmarks: Vec::new(),
            marks: TimelineMarks::new(),
        }
    }

    /// Last valid frame; 0 for an empty output.
    pub fn last_frame(&self) -> Frame {
        Frame(self.total_frames.saturating_sub(1))
    }

    pub fn total_time(&self) -> Duration {
        self.fps.frame_to_time(Frame(self.total_frames))
    }

    pub fn frame_to_time(&self, frame: Frame) -> Duration {
        self.fps.frame_to_time(frame)
    }

    /// Frame shown at `t`, clamped to the last frame.
    pub fn time_to_frame(&self, t: Duration) -> Frame {
        self.fps.time_to_frame(t).min(self.last_frame())
    }

    pub fn bookmark_at(&self, frame: Frame) -> Option<&Bookmark> {
        self.bookmarks
            .binary_search_by_key(&frame, |b| b.frame)
            .ok()
            .map(|i| &self.bookmarks[i])
    }

    /// Adds a bookmark, replacing the label of an existing one on the same frame.
    pub fn add_bookmark(&mut self, frame: Frame, label: impl Into<String>) -> Result<()> {
        if frame > self.last_frame() {
            return Err(LibraryError::Output(format!(
                "bookmark frame {} is past the last frame {} of output {}",
                frame,
                self.last_frame(),
                self.index
            )));
        }
        let bookmark = Bookmark::new(frame, label);
        match self.bookmarks.binary_search_by_key(&frame, |b| b.frame) {
            Ok(i) => self.bookmarks[i] = bookmark,
            Err(i) => self.bookmarks.insert(i, bookmark),
        }
        Ok(())
    }

    /// Returns the removed bookmark, if there was one.
    pub fn remove_bookmark(&mut self, frame: Frame) -> Option<Bookmark> {
        self.bookmarks
            .binary_search_by_key(&frame, |b| b.frame)
            .ok()
            .map(|i| self.bookmarks.remove(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_24000_1001() -> Output {
        Output::new(0, "main", FrameRate::new(24000, 1001).unwrap(), 1000)
    }

    #[test]
    fn frame_rate_rejects_zero() {
        assert!(FrameRate::new(0, 1).is_err());
        assert!(FrameRate::new(25, 0).is_err());
    }

    #[test]
    fn integral_rate_conversions() {
        let fps = FrameRate::new(25, 1).unwrap();
        assert_eq!(fps.frame_to_time(Frame(50)), Duration::from_secs(2));
        assert_eq!(fps.time_to_frame(Duration::from_millis(2039)), Frame(50));
        assert_eq!(fps.time_to_frame(Duration::from_millis(2040)), Frame(51));
    }

    #[test]
    fn ntsc_rate_round_trips_every_frame() {
        let output = output_24000_1001();
        for f in 0..output.total_frames {
            let t = output.frame_to_time(Frame(f));
            assert_eq!(output.time_to_frame(t), Frame(f));
        }
    }

    #[test]
    fn time_to_frame_clamps_to_last_frame() {
        let output = output_24000_1001();
        assert_eq!(
            output.time_to_frame(Duration::from_secs(3600)),
            output.last_frame()
        );
    }

    #[test]
    fn extreme_rates_saturate() {
        let output = Output::new(
            0,
            "huge",
            FrameRate::new(25, 9_000_000_000_000_000_000).unwrap(),
            9_000_000_000_000_000_000,
        );
        assert_eq!(output.total_time(), Duration::from_nanos(u64::MAX));

        let fast = FrameRate::new(u64::MAX, 1).unwrap();
        assert_eq!(fast.time_to_frame(Duration::MAX), Frame(u64::MAX));
        let fast_output = Output::new(0, "fast", fast, 100);
        assert_eq!(fast_output.time_to_frame(Duration::MAX), Frame(99));
    }

    #[test]
    fn empty_output_has_zero_last_frame() {
        let output = Output::new(1, "empty", FrameRate::new(25, 1).unwrap(), 0);
        assert_eq!(output.last_frame(), Frame::ZERO);
        assert_eq!(output.total_time(), Duration::ZERO);
    }

    #[test]
    fn bookmarks_stay_sorted_and_unique() {
        let mut output = output_24000_1001();
        output.add_bookmark(Frame(40), "b").unwrap();
        output.add_bookmark(Frame(10), "a").unwrap();
        output.add_bookmark(Frame(40), "b2").unwrap();

        let frames: Vec<_> = output.bookmarks.iter().map(|b| b.frame).collect();
        assert_eq!(frames, vec![Frame(10), Frame(40)]);
        assert_eq!(output.bookmark_at(Frame(40)).unwrap().label, "b2");
    }

    #[test]
    fn bookmark_past_end_is_rejected() {
        let mut output = output_24000_1001();
        assert!(output.add_bookmark(Frame(1000), "x").is_err());
    }

    #[test]
    fn remove_bookmark() {
        let mut output = output_24000_1001();
        output.add_bookmark(Frame(3), "a").unwrap();
        assert_eq!(output.remove_bookmark(Frame(3)).unwrap().label, "a");
        assert!(output.remove_bookmark(Frame(3)).is_none());
    }
}
