//! Theme context.
//!
//! The provider keeps a multi-theme shaped API (`Theme`, `ThemeContextValue`,
//! `use_theme`) while pinning every consumer to [`FORCED_THEME`].

pub mod document;
pub mod provider;

pub use document::{ClassList, DocumentRoot};
pub use provider::{use_theme, ThemeProvider, ThemeScope};

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

pub const FORCED_THEME: Theme = Theme::Light;

impl Theme {
    /// Class marker placed on the document root.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeContextValue {
    pub theme: Theme,
}

impl Default for ThemeContextValue {
    fn default() -> Self {
        Self {
            theme: FORCED_THEME,
        }
    }
}
