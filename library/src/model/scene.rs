use serde::{Deserialize, Serialize};

use crate::error::{LibraryError, Result};
use crate::model::Frame;

/// A labeled span of frames, `start..=end`. `end >= start` always holds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "RawScene")]
pub struct Scene {
    start: Frame,
    end: Frame,
    #[serde(default)]
    pub label: String,
}

#[derive(Deserialize)]
struct RawScene {
    start: Frame,
    end: Frame,
    #[serde(default)]
    label: String,
}

impl TryFrom<RawScene> for Scene {
    type Error = LibraryError;

    fn try_from(raw: RawScene) -> Result<Self> {
        Scene::new(raw.start, raw.end, raw.label)
    }
}

impl Scene {
    pub fn new(start: Frame, end: Frame, label: impl Into<String>) -> Result<Self> {
        if end < start {
            return Err(LibraryError::InvalidArgument(format!(
                "scene end {} is before its start {}",
                end, start
            )));
        }
        Ok(Self {
            start,
            end,
            label: label.into(),
        })
    }

    /// A scene covering a single frame.
    pub fn single(frame: Frame, label: impl Into<String>) -> Self {
        Self {
            start: frame,
            end: frame,
            label: label.into(),
        }
    }

    pub fn start(&self) -> Frame {
        self.start
    }

    pub fn end(&self) -> Frame {
        self.end
    }

    pub fn is_single_frame(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, frame: Frame) -> bool {
        self.start <= frame && frame <= self.end
    }

    /// Number of frames covered, both ends included.
    pub fn len(&self) -> u64 {
        self.end.index().saturating_sub(self.start.index()) + 1
    }
}
