pub mod preview;
pub mod toolbar;
