/// Reusable type definitions for gripframe configuration.
///
/// Contains the gesture hotspot settings and the title bar colour
/// overrides shared across the configuration subsystem.
use serde::{Deserialize, Serialize};

/// Hotspot sizes and resize limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Side of the square at each corner that starts a diagonal resize.
    pub corner_size: i32,
    /// Thickness of the edge band that starts a one-axis resize.
    pub border_width: i32,
    /// Resizes producing a width or height at or below this are dropped.
    pub min_size: i32,
    /// Whether the top-right corner hosts a close spot instead of a resize.
    pub close_button: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            corner_size: 9,
            border_width: 3,
            min_size: 30,
            close_button: false,
        }
    }
}

impl GestureConfig {
    pub(crate) fn validate(&mut self) {
        self.corner_size = self.corner_size.clamp(1, 64);
        self.border_width = self.border_width.clamp(1, 32).min(self.corner_size);
        self.min_size = self.min_size.clamp(1, 500);
    }
}

/// Title bar colour overrides.
///
/// Each value may be a hex code, a named palette colour, or empty to
/// use the theme's colour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Title bar colour of inactive frames.
    pub tile_bar: String,
    /// Title bar colour of the active frame.
    pub tile_bar_selected: String,
    /// Body colour of frames that don't set their own.
    pub background: String,
}
