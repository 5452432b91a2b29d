//! Colour tables behind each [`Theme`].
//!
//! A theme fills the four chrome slots and a fixed set of accents. Both
//! can be named in `[chrome]` instead of writing hex: the slots as
//! `bar`, `selected`, `base` and `text`, the accents by colour name.

use super::theme::Theme;

/// Colours a frame's chrome is painted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileColors {
    /// Title bar of an inactive frame.
    pub tile_bar: String,
    /// Title bar of the active frame.
    pub tile_bar_selected: String,
    /// Frame body.
    pub background: String,
    /// Heading text.
    pub heading: String,
}

const SLOT_NAMES: [&str; 4] = ["bar", "selected", "base", "text"];
const ACCENT_NAMES: [&str; 6] = ["blue", "lavender", "mauve", "green", "peach", "red"];

struct Palette {
    slots: [&'static str; 4],
    accents: [&'static str; 6],
}

// Catppuccin flavors use surface0, surface1, base and text for the slots.
const MOCHA: Palette = Palette {
    slots: ["#313244", "#45475a", "#1e1e2e", "#cdd6f4"],
    accents: ["#89b4fa", "#b4befe", "#cba6f7", "#a6e3a1", "#fab387", "#f38ba8"],
};

const MACCHIATO: Palette = Palette {
    slots: ["#363a4f", "#494d64", "#24273a", "#cad3f5"],
    accents: ["#8aadf4", "#b7bdf8", "#c6a0f6", "#a6da95", "#f5a97f", "#ed8796"],
};

const FRAPPE: Palette = Palette {
    slots: ["#414559", "#51576d", "#303446", "#c6d0f5"],
    accents: ["#8caaee", "#babbf1", "#ca9ee6", "#a6d189", "#ef9f76", "#e78284"],
};

const LATTE: Palette = Palette {
    slots: ["#ccd0da", "#bcc0cc", "#eff1f5", "#4c4f69"],
    accents: ["#1e66f5", "#7287fd", "#8839ef", "#40a02b", "#fe640b", "#d20f39"],
};

const CLASSIC: Palette = Palette {
    slots: ["#9a9ca3", "#c4c6cc", "#ffffff", "#000000"],
    accents: ["#3a6ea5", "#9aa5d6", "#8e6fb5", "#3f8f4f", "#e0955e", "#c0392b"],
};

fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Mocha => &MOCHA,
        Theme::Macchiato => &MACCHIATO,
        Theme::Frappe => &FRAPPE,
        Theme::Latte => &LATTE,
        Theme::Classic => &CLASSIC,
    }
}

/// Returns the chrome colours for the given theme.
pub fn tile_colors(theme: Theme) -> TileColors {
    let [tile_bar, tile_bar_selected, background, heading] = palette(theme).slots;
    TileColors {
        tile_bar: tile_bar.into(),
        tile_bar_selected: tile_bar_selected.into(),
        background: background.into(),
        heading: heading.into(),
    }
}

/// Looks up a slot or accent name, ignoring case.
pub fn named_color(theme: Theme, name: &str) -> Option<&'static str> {
    let p = palette(theme);
    SLOT_NAMES
        .iter()
        .zip(p.slots)
        .chain(ACCENT_NAMES.iter().zip(p.accents))
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, hex)| hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Theme; 5] = [
        Theme::Mocha,
        Theme::Macchiato,
        Theme::Frappe,
        Theme::Latte,
        Theme::Classic,
    ];

    #[test]
    fn slot_names_alias_the_tile_colors() {
        for theme in ALL {
            let tiles = tile_colors(theme);
            assert_eq!(named_color(theme, "bar"), Some(tiles.tile_bar.as_str()));
            assert_eq!(named_color(theme, "Selected"), Some(tiles.tile_bar_selected.as_str()));
            assert_eq!(named_color(theme, "base"), Some(tiles.background.as_str()));
            assert_eq!(named_color(theme, "TEXT"), Some(tiles.heading.as_str()));
        }
    }

    #[test]
    fn accents_follow_the_flavor() {
        assert_eq!(named_color(Theme::Mocha, "blue"), Some("#89b4fa"));
        assert_eq!(named_color(Theme::Latte, "blue"), Some("#1e66f5"));
        assert_eq!(named_color(Theme::Classic, "red"), Some("#c0392b"));
    }

    #[test]
    fn unknown_names_and_hex_are_not_names() {
        assert_eq!(named_color(Theme::Mocha, "chartreuse"), None);
        assert_eq!(named_color(Theme::Mocha, "#89b4fa"), None);
        assert_eq!(named_color(Theme::Mocha, ""), None);
    }

    #[test]
    fn active_and_inactive_bars_differ() {
        for theme in ALL {
            let c = tile_colors(theme);
            assert_ne!(c.tile_bar, c.tile_bar_selected, "{theme:?}");
        }
    }

    #[test]
    fn every_palette_entry_is_hex() {
        for theme in ALL {
            let p = palette(theme);
            for hex in p.slots.iter().chain(&p.accents) {
                assert!(
                    hex.len() == 7 && hex.starts_with('#'),
                    "{theme:?} has malformed {hex}"
                );
            }
        }
    }
}
