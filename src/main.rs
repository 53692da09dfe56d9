use anyhow::Result;
use clap::{Parser, ValueEnum};
use grid_snake::game::GameConfig;
use grid_snake::logging;
use grid_snake::modes::PlayMode;
use grid_snake::render::{Palette, ShapeKind};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a 640x480 grid, three apples at a time")]
struct Cli {
    /// How apples are drawn
    #[arg(long, value_enum, default_value = "rect")]
    apple_shape: AppleShape,

    /// Seed for apple placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostics to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum AppleShape {
    /// Filled square with a dark border
    Rect,
    /// Round glyph
    Circle,
}

impl From<AppleShape> for ShapeKind {
    fn from(shape: AppleShape) -> Self {
        match shape {
            AppleShape::Rect => ShapeKind::Rect,
            AppleShape::Circle => ShapeKind::Circle,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init(path)?;
    }

    let palette = Palette::with_apple_shape(cli.apple_shape.into());
    let mut play_mode = PlayMode::new(GameConfig::default(), palette, cli.seed);
    let summary = play_mode.run().await?;

    println!("{summary}");

    Ok(())
}
