pub mod color;
pub mod frame;
pub mod output;
pub mod scene;
pub mod time;
pub mod value;

pub use color::Color;
pub use frame::Frame;
pub use output::{Bookmark, FrameRate, Output};
pub use scene::Scene;
pub use value::Value;
