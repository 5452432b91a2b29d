use super::*;

#[test]
fn default_config_has_expected_values() {
    let mut config = Config::default();
    config.validate();

    assert_eq!(config.theme.resolve(), Theme::Mocha);
    assert_eq!(config.gesture.corner_size, 9);
    assert_eq!(config.gesture.border_width, 3);
    assert_eq!(config.gesture.min_size, 30);
    assert!(!config.gesture.close_button);
}

#[test]
fn validate_resolves_chrome_colors_from_theme() {
    let mut config = Config::default();
    config.validate();

    assert_eq!(config.chrome.tile_bar, "#313244");
    assert_eq!(config.chrome.tile_bar_selected, "#45475a");
    assert_eq!(config.chrome.background, "#1e1e2e");
}

#[test]
fn explicit_chrome_color_overrides_theme() {
    let mut config = Config {
        chrome: ChromeConfig {
            tile_bar_selected: "#ff0000".into(),
            ..Default::default()
        },
        ..Default::default()
    };
    config.validate();

    assert_eq!(config.chrome.tile_bar_selected, "#ff0000");
    assert_eq!(config.chrome.tile_bar, "#313244"); // still from theme
}

#[test]
fn named_color_in_chrome_resolves_to_hex() {
    let mut config = Config {
        theme: ThemeConfig {
            name: "catppuccin".into(),
            flavor: "latte".into(),
        },
        chrome: ChromeConfig {
            tile_bar_selected: "blue".into(),
            ..Default::default()
        },
        ..Default::default()
    };
    config.validate();

    assert_eq!(config.chrome.tile_bar_selected, "#1e66f5");
    assert_eq!(config.chrome.background, "#eff1f5");
}

#[test]
fn partial_toml_uses_defaults_for_missing_sections() {
    // Arrange
    let toml_str = "[gesture]\ncorner_size = 12\n";

    // Act
    let config: Config = toml::from_str(toml_str).unwrap();

    // Assert
    assert_eq!(config.gesture.corner_size, 12);
    assert_eq!(config.gesture.border_width, 3);
    assert_eq!(config.logging.level, crate::log::Level::Info);
}

#[test]
fn validate_clamps_extreme_values() {
    // Arrange
    let mut config = Config {
        gesture: GestureConfig {
            corner_size: -4,
            border_width: 99,
            min_size: 10_000,
            close_button: false,
        },
        ..Default::default()
    };

    // Act
    config.validate();

    // Assert
    assert_eq!(config.gesture.corner_size, 1);
    assert_eq!(config.gesture.border_width, 1);
    assert_eq!(config.gesture.min_size, 500);
}

#[test]
fn border_never_exceeds_corner() {
    let mut config = Config {
        gesture: GestureConfig {
            corner_size: 6,
            border_width: 10,
            ..Default::default()
        },
        ..Default::default()
    };

    config.validate();

    assert_eq!(config.gesture.border_width, 6);
}

#[test]
fn validated_config_survives_toml_round_trip() {
    let mut config = Config::default();
    config.validate();

    let text = config.to_toml().unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();

    assert_eq!(parsed.gesture, config.gesture);
    assert_eq!(parsed.chrome, config.chrome);
}
