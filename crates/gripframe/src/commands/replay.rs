use std::path::PathBuf;

use clap::Args;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use gripframe_core::config::Config;
use gripframe_core::replay::{self, ReplayStep, Script, ScriptEvent, StepOutcome};
use gripframe_core::{MoveOutcome, PressOutcome};

/// Arguments for the `replay` subcommand.
#[derive(Args)]
pub struct ReplayArgs {
    /// Path to a TOML gesture script
    script: PathBuf,
    /// Print one JSON object per event instead of a table
    #[arg(long)]
    json: bool,
}

pub fn execute(args: &ReplayArgs, config: &Config) {
    let script = match Script::load(&args.script) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let steps = replay::run(&script, &config.gesture);
    gripframe_core::log_debug!(
        "replayed {} events from {}",
        steps.len(),
        args.script.display()
    );

    if args.json {
        for step in &steps {
            match serde_json::to_string(step) {
                Ok(line) => println!("{line}"),
                Err(e) => eprintln!("Error: could not serialize step {}: {e}", step.index),
            }
        }
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Event"),
            Cell::new("Outcome"),
            Cell::new("State"),
            Cell::new("Frame"),
            Cell::new("Factors"),
        ]);

    for step in &steps {
        table.add_row(vec![
            Cell::new(step.index).set_alignment(CellAlignment::Right),
            Cell::new(describe_event(&step.event)),
            Cell::new(describe_outcome(step)),
            Cell::new(step.state),
            Cell::new(step.frame),
            Cell::new(format!(
                "{:.3} x {:.3}",
                step.factors.width, step.factors.height
            )),
        ]);
    }

    println!("{table}");
    println!("\n{} events replayed", steps.len());
}

fn describe_event(event: &ScriptEvent) -> String {
    match event {
        ScriptEvent::Press { x, y, button } => format!("press {button:?} ({x}, {y})"),
        ScriptEvent::Move { x, y, pressed: true } => format!("drag ({x}, {y})"),
        ScriptEvent::Move { x, y, pressed: false } => format!("hover ({x}, {y})"),
        ScriptEvent::Release => "release".into(),
        ScriptEvent::FrameMoved { x, y } => format!("frame moved ({x}, {y})"),
    }
}

fn describe_outcome(step: &ReplayStep) -> String {
    match step.outcome {
        StepOutcome::Press(PressOutcome::Ignored) => "ignored".into(),
        StepOutcome::Press(PressOutcome::CloseRequested) => "close requested".into(),
        StepOutcome::Press(PressOutcome::Started { state, .. }) => format!("started {state}"),
        StepOutcome::Move(MoveOutcome::Hover { cursor }) => format!("hover {cursor:?}"),
        StepOutcome::Move(MoveOutcome::Moving { delta }) => {
            format!("moving by ({}, {})", delta.x, delta.y)
        }
        StepOutcome::Move(MoveOutcome::Resizing { update }) => {
            format!("resizing to {}x{}", update.size.width, update.size.height)
        }
        StepOutcome::Move(MoveOutcome::Rejected) => "rejected (too small)".into(),
        StepOutcome::Move(MoveOutcome::Cancelled) => "cancelled".into(),
        StepOutcome::Release(result) => format!("{result:?}").to_lowercase(),
        StepOutcome::FrameMoved { dropped: true } => "gesture dropped".into(),
        StepOutcome::FrameMoved { dropped: false } => "no effect".into(),
    }
}
