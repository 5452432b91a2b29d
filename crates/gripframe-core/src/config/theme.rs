//! The `[theme]` section and the theme it resolves to.

use serde::{Deserialize, Serialize};

use super::palette::{self, TileColors};

/// `[theme]` as written in `config.toml`.
///
/// `name` picks the family (`catppuccin` or `classic`) and `flavor` the
/// Catppuccin variant. Both are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub name: String,
    pub flavor: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "catppuccin".into(),
            flavor: "mocha".into(),
        }
    }
}

impl ThemeConfig {
    /// Anything unrecognised resolves to [`Theme::Mocha`]. The classic
    /// theme ignores `flavor`.
    pub fn resolve(&self) -> Theme {
        let name = self.name.to_ascii_lowercase();
        let flavor = self.flavor.to_ascii_lowercase();
        match (name.as_str(), flavor.as_str()) {
            ("classic", _) => Theme::Classic,
            ("catppuccin", "macchiato") => Theme::Macchiato,
            ("catppuccin", "frappe" | "frappé") => Theme::Frappe,
            ("catppuccin", "latte") => Theme::Latte,
            _ => Theme::Mocha,
        }
    }
}

/// Colour theme the painter looks chrome colours up in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Mocha,
    Macchiato,
    Frappe,
    /// The only light Catppuccin flavor.
    Latte,
    /// White tiles under grey aluminium title bars.
    Classic,
}

impl Theme {
    pub fn tile_colors(self) -> TileColors {
        palette::tile_colors(self)
    }

    /// Turns a `[chrome]` colour value into hex.
    ///
    /// Empty values take `fallback`, hex passes through, names go
    /// through the palette. Unknown names are returned unchanged so the
    /// painter can fall back on its own.
    pub fn resolve_color<'a>(&self, value: &'a str, fallback: &'a str) -> &'a str {
        if value.is_empty() {
            fallback
        } else if value.starts_with('#') {
            value
        } else {
            palette::named_color(*self, value).unwrap_or(value)
        }
    }
}
