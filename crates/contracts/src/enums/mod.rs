pub mod display_width;

pub use display_width::DisplayWidth;
