//! Settings and shared constants.

pub mod config;
pub mod constants;

pub use config::{GameConfig, GlyphSet};
pub use constants::*;
