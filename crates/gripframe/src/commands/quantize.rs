use clap::Args;

use gripframe_core::{ScaleFactors, Size, quantize_to_grid};

/// Arguments for the `quantize` subcommand.
#[derive(Args)]
pub struct QuantizeArgs {
    /// Frame width when the gesture began
    #[arg(long)]
    width: i32,
    /// Frame height when the gesture began
    #[arg(long)]
    height: i32,
    /// Width factor when the gesture began
    #[arg(long, default_value_t = 1.0)]
    width_factor: f64,
    /// Height factor when the gesture began
    #[arg(long, default_value_t = 1.0)]
    height_factor: f64,
    /// Requested width
    #[arg(long)]
    to_width: i32,
    /// Requested height
    #[arg(long)]
    to_height: i32,
}

pub fn execute(args: &QuantizeArgs) {
    if args.to_width <= 0 || args.to_height <= 0 {
        eprintln!("Error: requested size must be positive.");
        std::process::exit(1);
    }

    let q = quantize_to_grid(
        Size::new(args.width, args.height),
        ScaleFactors::new(args.width_factor, args.height_factor),
        Size::new(args.to_width, args.to_height),
    );

    println!(
        "{}x{} (factors {:.4} x {:.4})",
        q.size.width, q.size.height, q.factors.width, q.factors.height
    );
}
