//! Headless gesture replay.
//!
//! A replay script describes a frame and a sequence of pointer events in
//! TOML. [`run`] feeds them through a [`GeometryController`] attached to
//! a [`SimFrame`], which applies every move and resize the controller
//! asks for, the way a toolkit adapter would.
//!
//! ```toml
//! [frame]
//! x = 100
//! y = 100
//! width = 400
//! height = 300
//! top_margin = 20
//! width_factor = 2.0
//! height_factor = 2.0
//!
//! [[event]]
//! kind = "press"
//! x = 498
//! y = 101
//!
//! [[event]]
//! kind = "move"
//! x = 518
//! y = 91
//!
//! [[event]]
//! kind = "release"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::GestureConfig;
use crate::controller::{GeometryController, GestureResult, MoveOutcome, PressOutcome};
use crate::frame::{Frame, PointerButton, PointerMove, PointerPress};
use crate::grid::ScaleFactors;
use crate::{DragState, Point, Rect, Size};

/// A parsed replay script.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub frame: FrameSpec,
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptEvent>,
}

/// Initial frame geometry and flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameSpec {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub top_margin: i32,
    pub resizable: bool,
    pub visible: bool,
    pub width_factor: f64,
    pub height_factor: f64,
}

impl Default for FrameSpec {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 400,
            height: 300,
            top_margin: 20,
            resizable: true,
            visible: true,
            width_factor: 1.0,
            height_factor: 1.0,
        }
    }
}

/// One scripted input. Coordinates are global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEvent {
    Press {
        x: i32,
        y: i32,
        #[serde(default)]
        button: PointerButton,
    },
    Move {
        x: i32,
        y: i32,
        #[serde(default = "held")]
        pressed: bool,
    },
    Release,
    /// Something other than the gesture moved the frame to `(x, y)`.
    FrameMoved { x: i32, y: i32 },
}

fn held() -> bool {
    true
}

/// What the controller answered to one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StepOutcome {
    Press(PressOutcome),
    Move(MoveOutcome),
    Release(GestureResult),
    FrameMoved { dropped: bool },
}

/// Record of one replayed event and the frame afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayStep {
    pub index: usize,
    pub event: ScriptEvent,
    pub outcome: StepOutcome,
    pub frame: Rect,
    pub factors: ScaleFactors,
    pub state: DragState,
    pub gripped: bool,
}

impl Script {
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
        Self::from_toml(&content).map_err(|e| format!("{}: {e}", path.display()))
    }
}

/// A frame that lives only in memory and obeys every request.
#[derive(Debug, Clone, PartialEq)]
pub struct SimFrame {
    pub rect: Rect,
    pub top_margin: i32,
    pub visible: bool,
    pub resizable: bool,
}

impl SimFrame {
    pub fn from_spec(spec: &FrameSpec) -> Self {
        Self {
            rect: Rect::new(spec.x, spec.y, spec.width, spec.height),
            top_margin: spec.top_margin,
            visible: spec.visible,
            resizable: spec.resizable,
        }
    }

    pub fn move_to(&mut self, position: Point) {
        self.rect.x = position.x;
        self.rect.y = position.y;
    }

    pub fn resize(&mut self, size: Size) {
        self.rect.width = size.width;
        self.rect.height = size.height;
    }
}

impl Frame for SimFrame {
    fn position(&self) -> Point {
        self.rect.position()
    }

    fn size(&self) -> Size {
        self.rect.size()
    }

    fn top_margin(&self) -> i32 {
        self.top_margin
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_resizable(&self) -> bool {
        self.resizable
    }
}

/// Replays a script and returns one step per event.
pub fn run(script: &Script, config: &GestureConfig) -> Vec<ReplayStep> {
    let spec = &script.frame;
    let mut frame = SimFrame::from_spec(spec);
    let mut controller = GeometryController::new(
        config.clone(),
        ScaleFactors::new(spec.width_factor, spec.height_factor).snapped(),
    );

    script
        .events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let outcome = apply(&mut controller, &mut frame, event);
            ReplayStep {
                index,
                event: event.clone(),
                outcome,
                frame: frame.rect,
                factors: controller.factors(),
                state: controller.state(),
                gripped: controller.gripped(),
            }
        })
        .collect()
}

fn apply(controller: &mut GeometryController, frame: &mut SimFrame, event: &ScriptEvent) -> StepOutcome {
    match *event {
        ScriptEvent::Press { x, y, button } => {
            let global = Point::new(x, y);
            let press = PointerPress {
                button,
                local: frame.map_from_global(global),
                global,
            };
            StepOutcome::Press(controller.begin_gesture(&*frame, press))
        }
        ScriptEvent::Move { x, y, pressed } => {
            let global = Point::new(x, y);
            let pointer = PointerMove {
                local: frame.map_from_global(global),
                global,
                pressed,
            };
            let origin = controller.snapshot().map(|s| s.origin.position());
            let outcome = controller.update_gesture(&*frame, pointer);
            match outcome {
                MoveOutcome::Moving { delta } => {
                    if let Some(origin) = origin {
                        frame.move_to(origin.offset(delta));
                    }
                }
                MoveOutcome::Resizing { update } => {
                    if let Some(position) = update.position {
                        frame.move_to(position);
                    }
                    frame.resize(update.size);
                }
                _ => {}
            }
            StepOutcome::Move(outcome)
        }
        ScriptEvent::Release => StepOutcome::Release(controller.end_gesture()),
        ScriptEvent::FrameMoved { x, y } => {
            frame.move_to(Point::new(x, y));
            StepOutcome::FrameMoved {
                dropped: controller.frame_moved(),
            }
        }
    }
}
