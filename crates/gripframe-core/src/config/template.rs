/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `gripframe init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# gripframe configuration
# Location: ~/.config/gripframe/config.toml

# Color theme for title bars and frame bodies.
# Available: name = "catppuccin", flavor = mocha | macchiato | frappe | latte
#            name = "classic" (white tiles, grey title bars)
[theme]
name = "catppuccin"
flavor = "mocha"

[gesture]
# Side in pixels of the square at each corner that starts a diagonal resize.
corner_size = 9
# Thickness in pixels of the edge band that starts a one-axis resize.
border_width = 3
# Resizes that would leave a width or height at or below this are ignored.
min_size = 30
# Turn the top-right corner into a close spot instead of a resize handle.
close_button = false

[chrome]
# Override theme colors. Use hex, an accent (blue, lavender, mauve, green,
# peach, red) or another theme slot (bar, selected, base, text):
# tile_bar = "lavender"
# tile_bar_selected = "blue"
# background = "#ffffff"

[logging]
# Trace gestures to gripframe.log. The file starts empty on every run.
enabled = false
# Minimum level: "debug" (includes every gesture event), "info", "warn", "error".
level = "info"
# Log directory (default: ~/.config/gripframe/logs).
# dir = "/tmp/gripframe"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn template_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(config.gesture, defaults.gesture);
        assert_eq!(config.theme, defaults.theme);
        assert_eq!(config.logging, defaults.logging);
    }

    #[test]
    fn template_documents_every_section() {
        let text = generate_config();
        for section in ["[theme]", "[gesture]", "[chrome]", "[logging]"] {
            assert!(text.contains(section), "missing {section}");
        }
    }
}
