use std::time::Duration;

use crate::model::{Color, Frame, Scene};
use crate::timeline::{TimelineMark, TimelineMarks};

/// A dynamically typed value, used where callers are loosely typed
/// (manifest data, generic property plumbing).
///
/// Typed APIs convert from it with `TryFrom`, reporting
/// [`LibraryError::TypeMismatch`](crate::LibraryError::TypeMismatch) for
/// variants they do not accept.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Number(f64),
    String(String),
    Boolean(bool),
    Frame(Frame),
    Time(Duration),
    Scene(Scene),
    Color(Color),
    Mark(TimelineMark),
    Marks(TimelineMarks),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Boolean(_) => "Boolean",
            Value::Frame(_) => "Frame",
            Value::Time(_) => "Time",
            Value::Scene(_) => "Scene",
            Value::Color(_) => "Color",
            Value::Mark(_) => "TimelineMark",
            Value::Marks(_) => "TimelineMarks",
        }
    }

    pub fn as_frame(&self) -> Option<Frame> {
        match self {
            Value::Frame(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<Duration> {
        match self {
            Value::Time(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Frame> for Value {
    fn from(value: Frame) -> Self {
        Value::Frame(value)
    }
}

impl From<Duration> for Value {
    fn from(value: Duration) -> Self {
        Value::Time(value)
    }
}

impl From<Scene> for Value {
    fn from(value: Scene) -> Self {
        Value::Scene(value)
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Value::Color(value)
    }
}

impl From<TimelineMark> for Value {
    fn from(value: TimelineMark) -> Self {
        Value::Mark(value)
    }
}

impl From<TimelineMarks> for Value {
    fn from(value: TimelineMarks) -> Self {
        Value::Marks(value)
    }
}
