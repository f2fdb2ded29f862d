pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod telemetry;
pub mod theme;
pub mod utils;

pub use error::{Error, Result};
pub use theme::{use_theme, ThemeProvider};
