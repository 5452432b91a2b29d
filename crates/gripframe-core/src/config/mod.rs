mod loader;
pub mod palette;
pub mod template;
pub mod theme;
mod types;

use serde::{Deserialize, Serialize};

pub use crate::log::LogConfig;
pub use loader::{config_dir, config_path, load, try_load, try_load_from};
pub use theme::{Theme, ThemeConfig};
pub use types::{ChromeConfig, GestureConfig};

/// Top-level configuration for gripframe.
///
/// Loaded from `~/.config/gripframe/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colour theme used by the title bar painter.
    pub theme: ThemeConfig,
    /// Hotspot sizes and resize limits.
    pub gesture: GestureConfig,
    /// Title bar colour overrides.
    pub chrome: ChromeConfig,
    /// File logging.
    pub logging: LogConfig,
}

impl Config {
    /// Clamps gesture values to safe ranges and resolves chrome colours.
    ///
    /// Empty colours are filled from the theme and named colours are
    /// turned into hex, so later lookups never see unresolved values.
    pub fn validate(&mut self) {
        self.gesture.validate();

        let theme = self.theme.resolve();
        let tiles = theme.tile_colors();
        self.chrome.tile_bar = theme
            .resolve_color(&self.chrome.tile_bar, &tiles.tile_bar)
            .to_string();
        self.chrome.tile_bar_selected = theme
            .resolve_color(&self.chrome.tile_bar_selected, &tiles.tile_bar_selected)
            .to_string();
        self.chrome.background = theme
            .resolve_color(&self.chrome.background, &tiles.background)
            .to_string();
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests;
