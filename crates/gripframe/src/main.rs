mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gripframe",
    version,
    about = "Drag and resize geometry for frameless tile windows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Show the config file location and the effective settings
    Config,
    /// Report which hotspot a frame-local point falls in
    Classify(commands::classify::ClassifyArgs),
    /// Snap a candidate frame size onto the scale-factor grid
    Quantize(commands::quantize::QuantizeArgs),
    /// Replay a scripted gesture against a simulated frame
    Replay(commands::replay::ReplayArgs),
    /// Print the title bar display list for the configured theme
    Paint(commands::paint::PaintArgs),
}

fn main() {
    let cli = Cli::parse();

    let config = gripframe_core::config::load();
    if let Some(path) = gripframe_core::log::init(&config.logging) {
        gripframe_core::log_info!("logging to {}", path.display());
    }

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Config => commands::config::execute(&config),
        Commands::Classify(args) => commands::classify::execute(&args, &config),
        Commands::Quantize(args) => commands::quantize::execute(&args),
        Commands::Replay(args) => commands::replay::execute(&args, &config),
        Commands::Paint(args) => commands::paint::execute(&args, &config),
    }
}
