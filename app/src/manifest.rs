//! Script manifests: the TOML files describing the outputs a script produces.
//!
//! ```toml
//! [[outputs]]
//! name = "source"
//! fps_num = 24000
//! fps_den = 1001
//! frames = 34046
//!
//! [[outputs.bookmarks]]
//! frame = 1200
//! label = "opening"
//!
//! [[outputs.marks]]
//! start = 2400
//! end = 4800
//! label = "chapter 1"
//! color = { r = 255, g = 128, b = 0 }
//! ```
//!
//! A mark is a table with `frame`, `time` (seconds) or `start`/`end`, or a
//! bare frame number.

use std::fs;
use std::path::Path;

use library::model::time::from_seconds;
use library::{Color, Frame, FrameRate, Output, Scene, Value};
use log::{debug, info};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Deserialize, Debug, Default)]
struct Manifest {
    #[serde(default)]
    outputs: Vec<OutputEntry>,
}

#[derive(Deserialize, Debug)]
struct OutputEntry {
    name: Option<String>,
    fps_num: u64,
    #[serde(default = "default_fps_den")]
    fps_den: u64,
    frames: u64,
    #[serde(default)]
    bookmarks: Vec<BookmarkEntry>,
    #[serde(default)]
    marks: Vec<toml::Value>,
}

fn default_fps_den() -> u64 {
    1
}

#[derive(Deserialize, Debug)]
struct BookmarkEntry {
    frame: u64,
    #[serde(default)]
    label: String,
}

pub fn load_manifest(path: &Path, mark_color: Color) -> AppResult<Vec<Output>> {
    info!("Loading script manifest {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_manifest(&text, mark_color)
}

/// Builds outputs from manifest text. Marks without a color of their own get `mark_color`.
pub fn parse_manifest(text: &str, mark_color: Color) -> AppResult<Vec<Output>> {
    let manifest: Manifest = toml::from_str(text)?;
    manifest
        .outputs
        .into_iter()
        .enumerate()
        .map(|(index, entry)| build_output(index, entry, mark_color))
        .collect()
}

fn build_output(index: usize, entry: OutputEntry, mark_color: Color) -> AppResult<Output> {
    let fps = FrameRate::new(entry.fps_num, entry.fps_den)?;
    let name = entry.name.unwrap_or_else(|| format!("Output {}", index));
    let mut output = Output::new(index, name, fps, entry.frames);

    for bookmark in entry.bookmarks {
        output.add_bookmark(Frame(bookmark.frame), bookmark.label)?;
    }
    for mark in &entry.marks {
        let (value, color, label) = mark_value(mark)?;
        output
            .marks
            .add_value(value, color.unwrap_or(mark_color), &label)?;
    }

    debug!(
        "Output {} '{}': {} frames at {}, {} bookmark(s), {} mark(s)",
        index,
        output.name,
        output.total_frames,
        output.fps,
        output.bookmarks.len(),
        output.marks.len()
    );
    Ok(output)
}

fn mark_value(entry: &toml::Value) -> AppResult<(Value, Option<Color>, String)> {
    let table = match entry {
        toml::Value::Table(table) => table,
        other => return Ok((scalar_value(other)?, None, String::new())),
    };

    let frame_field = |key: &str| -> AppResult<Option<Frame>> {
        table.get(key).map(frame_number).transpose()
    };
    let label = match table.get("label") {
        Some(toml::Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(AppError::Manifest(format!(
                "mark label must be a string, found {}",
                other.type_str()
            )))
        }
        None => String::new(),
    };
    let color = table
        .get("color")
        .map(|c| c.clone().try_into::<Color>())
        .transpose()
        .map_err(|e| AppError::Manifest(format!("invalid mark color: {}", e)))?;

    let value = match (frame_field("start")?, frame_field("end")?) {
        (Some(start), Some(end)) => Value::Scene(Scene::new(start, end, label.clone())?),
        (Some(_), None) | (None, Some(_)) => {
            return Err(AppError::Manifest(
                "scene marks need both start and end".to_string(),
            ))
        }
        (None, None) => {
            if let Some(frame) = frame_field("frame")? {
                Value::Frame(frame)
            } else if let Some(time) = table.get("time") {
                match time {
                    toml::Value::Float(secs) => Value::Time(from_seconds(*secs)),
                    toml::Value::Integer(secs) => Value::Time(from_seconds(*secs as f64)),
                    other => scalar_value(other)?,
                }
            } else {
                return Err(AppError::Manifest(
                    "mark needs frame, time or start/end".to_string(),
                ));
            }
        }
    };
    Ok((value, color, label))
}

fn frame_number(value: &toml::Value) -> AppResult<Frame> {
    match value {
        toml::Value::Integer(n) if *n >= 0 => Ok(Frame(*n as u64)),
        other => Err(AppError::Manifest(format!(
            "frame numbers must be non-negative integers, found {}",
            other
        ))),
    }
}

/// Loosely typed conversion; anything that is not a frame number is left for
/// the mark list to reject.
fn scalar_value(value: &toml::Value) -> AppResult<Value> {
    Ok(match value {
        toml::Value::Integer(_) => Value::Frame(frame_number(value)?),
        toml::Value::Float(f) => Value::Number(*f),
        toml::Value::Boolean(b) => Value::Boolean(*b),
        toml::Value::String(s) => Value::String(s.clone()),
        other => Value::String(other.to_string()),
    })
}
