//! Title bar and frame body painting, as a display list.
//!
//! [`paint_frame`] turns a frame's chrome state into a list of
//! [`DrawCommand`]s that a toolkit adapter replays with its own painter.
//! Colours come from an injected [`ThemeLookup`] rather than global
//! state, so the same frame can be painted under any theme.

mod color;

use serde::{Deserialize, Serialize};

pub use color::Color;

use crate::config::{ChromeConfig, Theme};
use crate::{Rect, Size};

/// Title bands at least this tall get an outline instead of a filled bar.
const FILLED_BAR_LIMIT: i32 = 25;
/// Body colour of layout manager frames, which have no title band.
const MANAGER_BACKGROUND: Color = Color::rgb(0xb3, 0xb4, 0xba);
const HEADING_ALPHA: u8 = 200;
const EMBOSS_ALPHA: u8 = 180;
/// How far the embossed copy of the heading sits below the heading.
const EMBOSS_OFFSET: i32 = 2;
const MENU_BUTTON_WIDTH: i32 = 15;

/// Colour slots the painter asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    TileBar,
    TileBarSelected,
    Background,
    Heading,
}

/// Read-only colour source handed to the painter.
pub trait ThemeLookup {
    fn color(&self, role: ColorRole) -> Color;
}

impl ThemeLookup for Theme {
    fn color(&self, role: ColorRole) -> Color {
        let tiles = self.tile_colors();
        let hex = match role {
            ColorRole::TileBar => &tiles.tile_bar,
            ColorRole::TileBarSelected => &tiles.tile_bar_selected,
            ColorRole::Background => &tiles.background,
            ColorRole::Heading => &tiles.heading,
        };
        Color::from_hex(hex).unwrap_or(Color::DARK_GRAY)
    }
}

/// Theme colours with the user's `[chrome]` overrides applied.
///
/// Expects a validated [`ChromeConfig`]; unparsable entries fall back to
/// the theme.
#[derive(Debug, Clone)]
pub struct ChromePalette {
    theme: Theme,
    overrides: ChromeConfig,
}

impl ChromePalette {
    pub fn new(theme: Theme, overrides: ChromeConfig) -> Self {
        Self { theme, overrides }
    }
}

impl ThemeLookup for ChromePalette {
    fn color(&self, role: ColorRole) -> Color {
        let value = match role {
            ColorRole::TileBar => self.overrides.tile_bar.as_str(),
            ColorRole::TileBarSelected => self.overrides.tile_bar_selected.as_str(),
            ColorRole::Background => self.overrides.background.as_str(),
            ColorRole::Heading => "",
        };
        Color::from_hex(value).unwrap_or_else(|| self.theme.color(role))
    }
}

/// Everything about a frame that affects how its chrome looks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameChrome {
    pub size: Size,
    /// Height of the title band; zero means no title bar.
    pub top_margin: i32,
    pub title: String,
    /// Shown instead of the title when non-empty.
    pub subtitle: String,
    /// The frame has focus and gets the selected bar colour.
    pub active: bool,
    /// The pointer is over the frame.
    pub hovered: bool,
    /// Suppresses the hover menu button.
    pub no_menu: bool,
    /// Layout manager frames have a flat grey body and no menu.
    pub is_manager: bool,
    /// Body colour; the theme's background when unset.
    pub background: Option<Color>,
}

impl FrameChrome {
    /// Returns the text drawn in the title band.
    pub fn heading(&self) -> &str {
        if self.subtitle.is_empty() {
            &self.title
        } else {
            &self.subtitle
        }
    }
}

/// One primitive of the painted chrome, in frame-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Fill {
        rect: Rect,
        color: Color,
    },
    /// Vertical gradient from `top` to `bottom`.
    Gradient {
        rect: Rect,
        top: Color,
        bottom: Color,
    },
    Outline {
        rect: Rect,
        color: Color,
    },
    /// Text centered in `rect`.
    Text {
        rect: Rect,
        text: String,
        color: Color,
        point_size: i32,
        bold: bool,
    },
}

/// Builds the display list for a frame's body and title bar.
pub fn paint_frame(chrome: &FrameChrome, theme: &impl ThemeLookup) -> Vec<DrawCommand> {
    let Size { width, height } = chrome.size;
    let all = Rect::new(0, 0, width, height);
    let mut commands = vec![DrawCommand::Fill {
        rect: all,
        color: chrome
            .background
            .unwrap_or_else(|| theme.color(ColorRole::Background)),
    }];

    let margin = chrome.top_margin;
    if margin <= 0 {
        if chrome.is_manager {
            commands.push(DrawCommand::Fill {
                rect: all,
                color: MANAGER_BACKGROUND,
            });
        }
        return commands;
    }

    let bar = Rect::new(0, 0, width, margin);
    if margin < FILLED_BAR_LIMIT {
        let base = theme.color(if chrome.active {
            ColorRole::TileBarSelected
        } else {
            ColorRole::TileBar
        });
        commands.push(DrawCommand::Gradient {
            rect: bar,
            top: base.lighter(0.25),
            bottom: base,
        });
    } else {
        commands.push(DrawCommand::Outline {
            rect: Rect::new(0, 0, width - 1, height - 1),
            color: Color::DARK_GRAY,
        });
    }

    let heading = chrome.heading();
    if !heading.is_empty() {
        let text_color = theme.color(ColorRole::Heading);
        let emboss = if text_color.is_light() {
            Color::BLACK
        } else {
            Color::WHITE
        };
        let point_size = margin / 2 + 2;
        let shadow = Rect::new(0, EMBOSS_OFFSET, width, margin - EMBOSS_OFFSET);

        commands.push(DrawCommand::Text {
            rect: shadow,
            text: heading.to_string(),
            color: emboss.with_alpha(EMBOSS_ALPHA),
            point_size,
            bold: true,
        });
        commands.push(DrawCommand::Text {
            rect: bar,
            text: heading.to_string(),
            color: text_color.with_alpha(HEADING_ALPHA),
            point_size,
            bold: true,
        });
    }

    commands
}

/// Returns where the hover menu button sits, or `None` when it is hidden.
pub fn menu_button(chrome: &FrameChrome) -> Option<Rect> {
    if !chrome.hovered || chrome.no_menu || chrome.is_manager {
        return None;
    }
    let height = if chrome.top_margin > 20 { 20 } else { 15 };
    Some(Rect::new(0, 0, MENU_BUTTON_WIDTH, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl ThemeLookup for Fixed {
        fn color(&self, role: ColorRole) -> Color {
            match role {
                ColorRole::TileBar => Color::rgb(10, 10, 10),
                ColorRole::TileBarSelected => Color::rgb(20, 20, 20),
                ColorRole::Background => Color::WHITE,
                ColorRole::Heading => Color::BLACK,
            }
        }
    }

    fn tile(margin: i32) -> FrameChrome {
        FrameChrome {
            size: Size::new(400, 300),
            top_margin: margin,
            title: "Critical Power".into(),
            ..Default::default()
        }
    }

    #[test]
    fn thin_title_band_gets_a_filled_bar() {
        // Arrange
        let chrome = FrameChrome {
            active: true,
            ..tile(20)
        };

        // Act
        let commands = paint_frame(&chrome, &Fixed);

        // Assert
        assert_eq!(commands.len(), 4);
        assert_eq!(
            commands[1],
            DrawCommand::Gradient {
                rect: Rect::new(0, 0, 400, 20),
                top: Color::rgb(20, 20, 20).lighter(0.25),
                bottom: Color::rgb(20, 20, 20),
            }
        );
    }

    #[test]
    fn tall_title_band_gets_an_outline() {
        let commands = paint_frame(&tile(30), &Fixed);

        assert_eq!(
            commands[1],
            DrawCommand::Outline {
                rect: Rect::new(0, 0, 399, 299),
                color: Color::DARK_GRAY,
            }
        );
    }

    #[test]
    fn heading_is_embossed_then_drawn() {
        let commands = paint_frame(&tile(20), &Fixed);

        let DrawCommand::Text {
            rect,
            color,
            point_size,
            ..
        } = &commands[2]
        else {
            panic!("expected emboss text, got {:?}", commands[2]);
        };
        assert_eq!(*rect, Rect::new(0, 2, 400, 18));
        assert_eq!(*color, Color::WHITE.with_alpha(180));
        assert_eq!(*point_size, 12);

        let DrawCommand::Text { rect, color, .. } = &commands[3] else {
            panic!("expected heading text, got {:?}", commands[3]);
        };
        assert_eq!(*rect, Rect::new(0, 0, 400, 20));
        assert_eq!(*color, Color::BLACK.with_alpha(200));
    }

    #[test]
    fn subtitle_replaces_title() {
        let chrome = FrameChrome {
            subtitle: "Last 6 weeks".into(),
            ..tile(20)
        };

        assert_eq!(chrome.heading(), "Last 6 weeks");
    }

    #[test]
    fn manager_without_title_band_is_flat_grey() {
        let chrome = FrameChrome {
            is_manager: true,
            ..tile(0)
        };

        let commands = paint_frame(&chrome, &Fixed);

        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[1],
            DrawCommand::Fill {
                rect: Rect::new(0, 0, 400, 300),
                color: Color::rgb(0xb3, 0xb4, 0xba),
            }
        );
    }

    #[test]
    fn explicit_background_wins_over_theme() {
        let chrome = FrameChrome {
            background: Some(Color::rgb(1, 2, 3)),
            ..tile(0)
        };

        let commands = paint_frame(&chrome, &Fixed);

        assert_eq!(
            commands,
            vec![DrawCommand::Fill {
                rect: Rect::new(0, 0, 400, 300),
                color: Color::rgb(1, 2, 3),
            }]
        );
    }

    #[test]
    fn menu_button_follows_hover_and_flags() {
        let mut chrome = tile(20);
        assert_eq!(menu_button(&chrome), None);

        chrome.hovered = true;
        assert_eq!(menu_button(&chrome), Some(Rect::new(0, 0, 15, 15)));

        chrome.top_margin = 24;
        assert_eq!(menu_button(&chrome), Some(Rect::new(0, 0, 15, 20)));

        chrome.no_menu = true;
        assert_eq!(menu_button(&chrome), None);
    }

    #[test]
    fn palette_overrides_fall_back_to_theme() {
        let palette = ChromePalette::new(
            Theme::Mocha,
            ChromeConfig {
                tile_bar: "#ff0000".into(),
                ..Default::default()
            },
        );

        assert_eq!(palette.color(ColorRole::TileBar), Color::rgb(0xff, 0, 0));
        assert_eq!(
            palette.color(ColorRole::Background),
            Color::from_hex("#1e1e2e").unwrap()
        );
    }
}
