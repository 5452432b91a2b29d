use serde::{Deserialize, Serialize};

use crate::{Point, Rect, Size};

/// Queries the controller needs from the live frame.
///
/// Each toolkit adapter provides its own implementation. The controller
/// never mutates the frame; it returns requests the adapter applies.
pub trait Frame {
    /// Returns the frame's top-left corner in global coordinates.
    fn position(&self) -> Point;

    /// Returns the frame's current size.
    fn size(&self) -> Size;

    /// Returns the height of the title band (top content margin).
    fn top_margin(&self) -> i32;

    /// Returns whether the frame is currently shown.
    fn is_visible(&self) -> bool;

    /// Returns whether the user may move or resize the frame.
    fn is_resizable(&self) -> bool;

    /// Returns the frame's bounding rectangle.
    fn rect(&self) -> Rect {
        Rect::from_parts(self.position(), self.size())
    }

    /// Converts a global pointer position to frame-local coordinates.
    fn map_from_global(&self, global: Point) -> Point {
        global.delta_from(self.position())
    }
}

/// Mouse button that triggered a press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    /// Synthetic press with no button, never starts a gesture.
    None,
    #[default]
    Left,
    Right,
    Middle,
}

/// A pointer press delivered by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPress {
    pub button: PointerButton,
    /// Position relative to the frame's top-left corner.
    pub local: Point,
    pub global: Point,
}

/// A pointer move delivered by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerMove {
    pub local: Point,
    pub global: Point,
    /// Whether any button is still held.
    pub pressed: bool,
}
