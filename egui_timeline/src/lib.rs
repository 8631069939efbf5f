//! egui panel for the preview timeline.
//!
//! All timeline logic lives in [`library::timeline`]; this crate only feeds it
//! the allocated rectangle and pointer input, paints the geometry it returns,
//! and keeps the full-repaint layer around between frames.

pub mod drawing;
pub mod state;
pub mod theme;
pub mod widget;

pub use state::TimelineState;
pub use theme::TimelineTheme;
pub use widget::{TimelineResponse, TimelineWidget};
