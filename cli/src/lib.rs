pub mod config;
pub mod render;

pub use crate::config::{ConfigError, MazeConfig};
pub use crate::render::render;
