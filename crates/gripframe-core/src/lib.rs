pub mod chrome;
pub mod config;
pub mod controller;
pub mod drag;
pub mod frame;
pub mod grid;
pub mod hotspot;
pub mod log;
pub mod rect;
pub mod replay;

pub use controller::{
    GeometryController, GeometryUpdate, GestureResult, GestureSnapshot, MoveOutcome, PressOutcome,
};
pub use drag::{CursorShape, DragState};
pub use frame::{Frame, PointerButton, PointerMove, PointerPress};
pub use grid::{Quantized, ScaleFactors, quantize_to_grid};
pub use hotspot::classify_hotspot;
pub use rect::{Point, Rect, Size};
