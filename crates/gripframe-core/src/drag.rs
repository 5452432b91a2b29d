use serde::{Deserialize, Serialize};

/// What a press at a given spot of the frame would start.
///
/// Exactly one state is active per controller at any time. `None`
/// means no gesture is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragState {
    #[default]
    None,
    Move,
    Left,
    Right,
    Top,
    Bottom,
    TopLeftCorner,
    TopRightCorner,
    BottomLeftCorner,
    BottomRightCorner,
    Close,
}

impl DragState {
    /// Returns true for the edge and corner states that change the size.
    pub fn is_resize(self) -> bool {
        matches!(
            self,
            Self::Left
                | Self::Right
                | Self::Top
                | Self::Bottom
                | Self::TopLeftCorner
                | Self::TopRightCorner
                | Self::BottomLeftCorner
                | Self::BottomRightCorner
        )
    }

    /// Returns the cursor hint shown while hovering over this hotspot.
    pub fn cursor(self) -> CursorShape {
        match self {
            Self::Top | Self::Bottom => CursorShape::SizeVertical,
            Self::Left | Self::Right => CursorShape::SizeHorizontal,
            Self::TopLeftCorner | Self::BottomRightCorner => CursorShape::SizeForwardDiagonal,
            Self::TopRightCorner | Self::BottomLeftCorner => CursorShape::SizeBackwardDiagonal,
            Self::Move | Self::Close | Self::None => CursorShape::Arrow,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Move => "move",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::TopLeftCorner => "top_left_corner",
            Self::TopRightCorner => "top_right_corner",
            Self::BottomLeftCorner => "bottom_left_corner",
            Self::BottomRightCorner => "bottom_right_corner",
            Self::Close => "close",
        }
    }
}

impl std::fmt::Display for DragState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory cursor shape for the toolkit adapter to display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorShape {
    #[default]
    Arrow,
    /// North-south resize arrows.
    SizeVertical,
    /// East-west resize arrows.
    SizeHorizontal,
    /// Top-left to bottom-right resize arrows.
    SizeForwardDiagonal,
    /// Top-right to bottom-left resize arrows.
    SizeBackwardDiagonal,
    /// Shown while a move gesture is in progress.
    DragMove,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_states_exclude_move_close_and_none() {
        assert!(DragState::Left.is_resize());
        assert!(DragState::BottomRightCorner.is_resize());
        assert!(!DragState::Move.is_resize());
        assert!(!DragState::Close.is_resize());
        assert!(!DragState::None.is_resize());
    }

    #[test]
    fn diagonal_cursors_pair_opposite_corners() {
        assert_eq!(
            DragState::TopLeftCorner.cursor(),
            DragState::BottomRightCorner.cursor()
        );
        assert_eq!(
            DragState::TopRightCorner.cursor(),
            DragState::BottomLeftCorner.cursor()
        );
        assert_ne!(
            DragState::TopLeftCorner.cursor(),
            DragState::TopRightCorner.cursor()
        );
    }

    #[test]
    fn move_hover_keeps_the_arrow() {
        assert_eq!(DragState::Move.cursor(), CursorShape::Arrow);
    }

    #[test]
    fn states_serialize_in_snake_case() {
        let json = serde_json::to_string(&DragState::TopRightCorner).unwrap();
        assert_eq!(json, "\"top_right_corner\"");
        assert_eq!(DragState::TopRightCorner.to_string(), "top_right_corner");
    }
}
