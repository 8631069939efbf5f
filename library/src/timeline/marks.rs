use std::time::Duration;

use crate::error::{LibraryError, Result};
use crate::model::{Color, Frame, Scene, Value};

/// Where a mark sits. Fixed when the mark is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkPosition {
    Frame(Frame),
    Time(Duration),
}

impl From<Frame> for MarkPosition {
    fn from(value: Frame) -> Self {
        MarkPosition::Frame(value)
    }
}

impl From<Duration> for MarkPosition {
    fn from(value: Duration) -> Self {
        MarkPosition::Time(value)
    }
}

/// One colored, optionally labeled marker on the timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineMark {
    position: MarkPosition,
    pub color: Color,
    pub label: String,
}

impl TimelineMark {
    pub fn new(position: impl Into<MarkPosition>, color: Color, label: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            color,
            label: label.into(),
        }
    }

    pub fn position(&self) -> MarkPosition {
        self.position
    }
}

/// Anything [`TimelineMarks::add`] can turn into marks.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkSource {
    Mark(TimelineMark),
    Scene(Scene),
    Frame(Frame),
    Time(Duration),
}

impl From<TimelineMark> for MarkSource {
    fn from(value: TimelineMark) -> Self {
        MarkSource::Mark(value)
    }
}

impl From<Scene> for MarkSource {
    fn from(value: Scene) -> Self {
        MarkSource::Scene(value)
    }
}

impl From<Frame> for MarkSource {
    fn from(value: Frame) -> Self {
        MarkSource::Frame(value)
    }
}

impl From<Duration> for MarkSource {
    fn from(value: Duration) -> Self {
        MarkSource::Time(value)
    }
}

impl TryFrom<Value> for MarkSource {
    type Error = LibraryError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Mark(mark) => Ok(MarkSource::Mark(mark)),
            Value::Scene(scene) => Ok(MarkSource::Scene(scene)),
            Value::Frame(frame) => Ok(MarkSource::Frame(frame)),
            Value::Time(t) => Ok(MarkSource::Time(t)),
            other => Err(LibraryError::type_mismatch(
                "TimelineMark, Scene, Frame or Time",
                other.type_name(),
            )),
        }
    }
}

/// Ordered, append-only collection of timeline marks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineMarks {
    items: Vec<TimelineMark>,
}

impl TimelineMarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the marks of another collection. Anything but `None` or a
    /// `Value::Marks` is a type mismatch.
    pub fn from_value(other: Option<Value>) -> Result<Self> {
        match other {
            None => Ok(Self::new()),
            Some(Value::Marks(marks)) => Ok(marks),
            Some(other) => Err(LibraryError::type_mismatch(
                "TimelineMarks",
                other.type_name(),
            )),
        }
    }

    /// Appends marks for `source`.
    ///
    /// A ready-made mark keeps its own color and label. A scene produces a mark
    /// at its start and, when the scene spans more than one frame, another at
    /// its end; both use `label`, or the scene's label when `label` is empty.
    pub fn add(&mut self, source: impl Into<MarkSource>, color: Color, label: &str) {
        match source.into() {
            MarkSource::Mark(mark) => self.items.push(mark),
            MarkSource::Scene(scene) => {
                let label = if label.is_empty() {
                    scene.label.as_str()
                } else {
                    label
                };
                self.items.push(TimelineMark::new(scene.start(), color, label));
                if !scene.is_single_frame() {
                    self.items.push(TimelineMark::new(scene.end(), color, label));
                }
            }
            MarkSource::Frame(frame) => self.items.push(TimelineMark::new(frame, color, label)),
            MarkSource::Time(t) => self.items.push(TimelineMark::new(t, color, label)),
        }
    }

    /// Like [`add`](Self::add) for loosely typed data.
    pub fn add_value(&mut self, value: Value, color: Color, label: &str) -> Result<()> {
        let source = MarkSource::try_from(value)?;
        self.add(source, color, label);
        Ok(())
    }

    pub fn items(&self) -> &[TimelineMark] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimelineMark> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a TimelineMarks {
    type Item = &'a TimelineMark;
    type IntoIter = std::slice::Iter<'a, TimelineMark>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
