//! Hotspot classification for frame-local pointer positions.
//!
//! Pure function over the frame size, so it can be tested without any
//! toolkit. Corners are checked before edges, and edges before the
//! title band.

use crate::config::GestureConfig;
use crate::{DragState, Point};

/// Maps a frame-local pointer position to the drag state a press there
/// would start.
///
/// `top_margin` is the height of the title band that moves the frame.
pub fn classify_hotspot(
    local: Point,
    width: i32,
    height: i32,
    top_margin: i32,
    config: &GestureConfig,
) -> DragState {
    let corner = config.corner_size;
    let border = config.border_width;
    let Point { x, y } = local;

    if config.close_button && x > 2 + width - corner && y < corner {
        return DragState::Close;
    }

    if x <= corner && y <= corner {
        DragState::TopLeftCorner
    } else if x >= width - corner && y <= corner {
        DragState::TopRightCorner
    } else if x <= corner && y >= height - corner {
        DragState::BottomLeftCorner
    } else if x >= width - corner && y >= height - corner {
        DragState::BottomRightCorner
    } else if x <= border {
        DragState::Left
    } else if x >= width - border {
        DragState::Right
    } else if y <= border {
        DragState::Top
    } else if y >= height - border {
        DragState::Bottom
    } else if y <= top_margin {
        DragState::Move
    } else {
        DragState::None
    }
}
