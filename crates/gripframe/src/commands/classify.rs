use clap::Args;

use gripframe_core::config::Config;
use gripframe_core::{Point, classify_hotspot};

/// Arguments for the `classify` subcommand.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Pointer X relative to the frame's left edge
    #[arg(long, allow_negative_numbers = true)]
    x: i32,
    /// Pointer Y relative to the frame's top edge
    #[arg(long, allow_negative_numbers = true)]
    y: i32,
    /// Frame width in pixels
    #[arg(long)]
    width: i32,
    /// Frame height in pixels
    #[arg(long)]
    height: i32,
    /// Title band height in pixels
    #[arg(long, default_value_t = 20)]
    margin: i32,
}

pub fn execute(args: &ClassifyArgs, config: &Config) {
    let state = classify_hotspot(
        Point::new(args.x, args.y),
        args.width,
        args.height,
        args.margin,
        &config.gesture,
    );
    println!("{state} (cursor: {:?})", state.cursor());
}
