//! Core library for the frame preview application.
//!
//! Everything here is independent of the UI toolkit: the frame/time model,
//! outputs, the observable view-model and the timeline state machine that a
//! toolkit widget drives.

pub mod error;
pub mod model;
pub mod observer;
pub mod timeline;
pub mod view_model;

pub use error::{LibraryError, Result};
pub use model::{Bookmark, Color, Frame, FrameRate, Output, Scene, Value};
pub use view_model::MainViewModel;
