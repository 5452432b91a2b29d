//! Press, drag and release handling for a single frame.
//!
//! [`GeometryController`] is the state machine a toolkit adapter drives
//! from its pointer callbacks. It never touches the frame directly: it
//! reads the live geometry through [`Frame`] and answers each event with
//! an outcome describing what the adapter should apply.

use serde::{Deserialize, Serialize};

use crate::config::GestureConfig;
use crate::frame::{Frame, PointerButton, PointerMove, PointerPress};
use crate::grid::{ScaleFactors, quantize_to_grid};
use crate::hotspot::classify_hotspot;
use crate::{CursorShape, DragState, Point, Rect, Size, log_event};

/// Frame state captured when a gesture begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSnapshot {
    /// Frame position and size at press time.
    pub origin: Rect,
    /// Scale factors at press time.
    pub factors: ScaleFactors,
    /// Global pointer position at press time.
    pub pointer: Point,
    /// Frame position requested by the last accepted update.
    pub last_position: Point,
    /// Global pointer position of the last accepted update.
    pub anchor: Point,
}

/// A resize the adapter should apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryUpdate {
    /// New top-left corner, present only when a leading edge moved.
    pub position: Option<Point>,
    /// Grid-quantized size.
    pub size: Size,
    /// Factors matching `size`.
    pub factors: ScaleFactors,
}

/// Answer to a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PressOutcome {
    /// No gesture started.
    Ignored,
    /// The close spot was pressed; closing is up to the caller.
    CloseRequested,
    Started {
        state: DragState,
        snapshot: GestureSnapshot,
    },
}

/// Answer to a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// No gesture active; only the hover cursor was recomputed.
    Hover { cursor: CursorShape },
    /// Move gesture in progress. The adapter moves the frame to the
    /// press-time position plus `delta`.
    Moving { delta: Point },
    /// Resize gesture produced a valid geometry.
    Resizing { update: GeometryUpdate },
    /// The candidate size was too small and was dropped.
    Rejected,
    /// The button was released outside the frame's view; the gesture
    /// has been abandoned.
    Cancelled,
}

/// What a completed gesture did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureResult {
    Nothing,
    Moved,
    Resized,
}

impl std::fmt::Display for GestureResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Nothing => "nothing",
            Self::Moved => "moved",
            Self::Resized => "resized",
        })
    }
}

/// Drag and resize state machine for one frame.
#[derive(Debug, Clone)]
pub struct GeometryController {
    config: GestureConfig,
    state: DragState,
    snapshot: Option<GestureSnapshot>,
    gripped: bool,
    cursor: CursorShape,
    factors: ScaleFactors,
}

impl GeometryController {
    pub fn new(config: GestureConfig, factors: ScaleFactors) -> Self {
        Self {
            config,
            state: DragState::None,
            snapshot: None,
            gripped: false,
            cursor: CursorShape::Arrow,
            factors,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Returns true while a move gesture holds the frame.
    pub fn gripped(&self) -> bool {
        self.gripped
    }

    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    pub fn factors(&self) -> ScaleFactors {
        self.factors
    }

    /// Replaces the current factors, e.g. after a layout restore.
    pub fn set_factors(&mut self, factors: ScaleFactors) {
        self.factors = factors;
    }

    pub fn snapshot(&self) -> Option<&GestureSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Handles a pointer press.
    ///
    /// Non-resizable or hidden frames and button-less presses leave the
    /// controller idle. A press on the close spot is reported but never
    /// starts a drag.
    pub fn begin_gesture(&mut self, frame: &impl Frame, press: PointerPress) -> PressOutcome {
        if !frame.is_resizable() || press.button == PointerButton::None || !frame.is_visible() {
            self.cancel();
            return PressOutcome::Ignored;
        }

        let size = frame.size();
        let hotspot = classify_hotspot(
            press.local,
            size.width,
            size.height,
            frame.top_margin(),
            &self.config,
        );

        match hotspot {
            DragState::Close => {
                self.cancel();
                log_event!("close_requested", at = press.local);
                PressOutcome::CloseRequested
            }
            DragState::None => {
                self.cancel();
                PressOutcome::Ignored
            }
            state => {
                let origin = frame.rect();
                let snapshot = GestureSnapshot {
                    origin,
                    factors: self.factors,
                    pointer: press.global,
                    last_position: origin.position(),
                    anchor: press.global,
                };
                self.snapshot = Some(snapshot);
                self.set_state(state);
                log_event!("gesture_start", state = state, origin = origin);
                PressOutcome::Started { state, snapshot }
            }
        }
    }

    /// Handles a pointer move.
    ///
    /// Sizes are always computed from the press-time snapshot, while
    /// positions follow the live frame so the adapter's own clamping
    /// is respected.
    pub fn update_gesture(&mut self, frame: &impl Frame, pointer: PointerMove) -> MoveOutcome {
        if !frame.is_resizable() {
            self.cancel();
            return MoveOutcome::Hover {
                cursor: self.cursor,
            };
        }

        if self.state == DragState::None {
            let size = frame.size();
            let hotspot = classify_hotspot(
                pointer.local,
                size.width,
                size.height,
                frame.top_margin(),
                &self.config,
            );
            self.cursor = hotspot.cursor();
            return MoveOutcome::Hover {
                cursor: self.cursor,
            };
        }

        if !pointer.pressed {
            log_event!("gesture_cancel", state = self.state, reason = "released");
            self.cancel();
            return MoveOutcome::Cancelled;
        }

        let state = self.state;
        let min_size = self.config.min_size;
        let Some(mut snapshot) = self.snapshot else {
            self.cancel();
            return MoveOutcome::Cancelled;
        };

        let delta = pointer.global.delta_from(snapshot.pointer);
        if state == DragState::Move {
            self.cursor = CursorShape::DragMove;
            return MoveOutcome::Moving { delta };
        }

        let (sx, sy) = resize_signs(state);
        let origin = snapshot.origin.size();
        let candidate = Size::new(
            origin.width.saturating_add(sx.saturating_mul(delta.x)),
            origin.height.saturating_add(sy.saturating_mul(delta.y)),
        );
        if candidate.width <= min_size || candidate.height <= min_size {
            log_event!("resize_rejected", state = state, candidate = candidate);
            return MoveOutcome::Rejected;
        }

        let quantized = quantize_to_grid(origin, snapshot.factors, candidate);
        if quantized.size.width <= min_size || quantized.size.height <= min_size {
            log_event!("resize_rejected", state = state, snapped = quantized.size);
            return MoveOutcome::Rejected;
        }

        let live = frame.position();
        let position = if sx < 0 || sy < 0 {
            let step = pointer.global.delta_from(snapshot.anchor);
            Some(live.offset(Point::new(
                if sx < 0 { step.x } else { 0 },
                if sy < 0 { step.y } else { 0 },
            )))
        } else {
            None
        };

        snapshot.anchor = pointer.global;
        snapshot.last_position = position.unwrap_or(live);
        self.snapshot = Some(snapshot);
        self.factors = quantized.factors;
        log_event!("resize", state = state, candidate = candidate, size = quantized.size);

        MoveOutcome::Resizing {
            update: GeometryUpdate {
                position,
                size: quantized.size,
                factors: quantized.factors,
            },
        }
    }

    /// Handles a pointer release and reports what the gesture did.
    pub fn end_gesture(&mut self) -> GestureResult {
        let result = match self.state {
            DragState::Move => GestureResult::Moved,
            s if s.is_resize() => GestureResult::Resized,
            _ => GestureResult::Nothing,
        };
        if result != GestureResult::Nothing {
            log_event!("gesture_end", state = self.state, result = result);
        }
        self.cancel();
        result
    }

    /// Notifies the controller that the frame was repositioned by
    /// something other than the current gesture, e.g. a layout pass.
    ///
    /// Resizes are abandoned because their snapshot no longer matches
    /// the frame. Returns true if a gesture was dropped.
    pub fn frame_moved(&mut self) -> bool {
        if self.state == DragState::Move || self.state == DragState::None {
            return false;
        }
        log_event!("gesture_cancel", state = self.state, reason = "frame_moved");
        self.cancel();
        true
    }

    /// Drops any gesture in progress.
    pub fn cancel(&mut self) {
        self.snapshot = None;
        self.set_state(DragState::None);
    }

    fn set_state(&mut self, state: DragState) {
        self.state = state;
        self.gripped = state == DragState::Move;
        self.cursor = state.cursor();
    }
}

/// Returns how the pointer delta feeds into width and height for a
/// resize state. A negative sign marks a leading edge, which also
/// moves the frame on that axis.
fn resize_signs(state: DragState) -> (i32, i32) {
    match state {
        DragState::Top => (0, -1),
        DragState::Bottom => (0, 1),
        DragState::Left => (-1, 0),
        DragState::Right => (1, 0),
        DragState::TopLeftCorner => (-1, -1),
        DragState::TopRightCorner => (1, -1),
        DragState::BottomLeftCorner => (-1, 1),
        DragState::BottomRightCorner => (1, 1),
        DragState::None | DragState::Move | DragState::Close => (0, 0),
    }
}
