//! Timeline model: maps frames and elapsed time to horizontal pixel offsets,
//! chooses tick spacing, and caches the ruler geometry between repaints.
//!
//! The model never touches a UI toolkit. A toolkit panel feeds it the viewport
//! rectangle and pointer events, and paints the [`TimelinePaint`] it returns.

pub mod geometry;
pub mod host;
pub mod layout;
pub mod marks;
pub mod model;
pub mod paint;
pub mod scale;

pub use geometry::{Line, Point, Rect};
pub use host::{FixedWidthText, OutputHost, TextMeasure, TimelineHost};
pub use layout::TimelineLayout;
pub use marks::{MarkPosition, MarkSource, TimelineMark, TimelineMarks};
pub use model::{Position, Timeline, TimelineClick};
pub use paint::{LabelAlign, MarkLine, Notch, NotchLabel, RepaintKind, TimelinePaint};
pub use scale::{LabelFormat, TimelineScale, select_tick_interval};
