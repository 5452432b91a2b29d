use clap::Args;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use serde::Serialize;

use gripframe_core::{Rect, Size};
use gripframe_core::chrome::{self, ChromePalette, DrawCommand, FrameChrome};
use gripframe_core::config::Config;

/// Arguments for the `paint` subcommand.
#[derive(Args)]
pub struct PaintArgs {
    /// Frame width in pixels
    #[arg(long, default_value_t = 400)]
    width: i32,
    /// Frame height in pixels
    #[arg(long, default_value_t = 300)]
    height: i32,
    /// Title band height in pixels; 0 paints no title bar
    #[arg(long, default_value_t = 20)]
    margin: i32,
    /// Frame title
    #[arg(long, default_value = "")]
    title: String,
    /// Shown instead of the title when set
    #[arg(long, default_value = "")]
    subtitle: String,
    /// Paint the frame as focused
    #[arg(long)]
    active: bool,
    /// Paint the frame as hovered, which shows the menu button
    #[arg(long)]
    hovered: bool,
    /// Hide the menu button
    #[arg(long)]
    no_menu: bool,
    /// Paint a layout manager frame
    #[arg(long)]
    manager: bool,
    /// Print the display list as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Painted {
    commands: Vec<DrawCommand>,
    menu_button: Option<Rect>,
}

pub fn execute(args: &PaintArgs, config: &Config) {
    let frame = FrameChrome {
        size: Size::new(args.width, args.height),
        top_margin: args.margin,
        title: args.title.clone(),
        subtitle: args.subtitle.clone(),
        active: args.active,
        hovered: args.hovered,
        no_menu: args.no_menu,
        is_manager: args.manager,
        background: None,
    };
    let palette = ChromePalette::new(config.theme.resolve(), config.chrome.clone());

    let painted = Painted {
        commands: chrome::paint_frame(&frame, &palette),
        menu_button: chrome::menu_button(&frame),
    };
    gripframe_core::log_debug!(
        "painted {} commands for {}",
        painted.commands.len(),
        frame.size
    );

    if args.json {
        match serde_json::to_string(&painted) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: could not serialize display list: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Op", "Rect", "Color", "Detail"]);

    for command in &painted.commands {
        let (op, rect, color, detail) = match command {
            DrawCommand::Fill { rect, color } => ("fill", rect, color.to_string(), String::new()),
            DrawCommand::Gradient { rect, top, bottom } => {
                ("gradient", rect, format!("{top} -> {bottom}"), String::new())
            }
            DrawCommand::Outline { rect, color } => {
                ("outline", rect, color.to_string(), String::new())
            }
            DrawCommand::Text {
                rect,
                text,
                color,
                point_size,
                bold,
            } => {
                let weight = if *bold { " bold" } else { "" };
                ("text", rect, color.to_string(), format!("{text:?} {point_size}pt{weight}"))
            }
        };
        table.add_row(vec![
            Cell::new(op),
            Cell::new(rect),
            Cell::new(color),
            Cell::new(detail),
        ]);
    }

    println!("{table}");
    match painted.menu_button {
        Some(rect) => println!("\nmenu button: {rect}"),
        None => println!("\nmenu button: hidden"),
    }
}
