//! Label command implementation.
//!
//! Slices the tileset named by a YAML config into tiles, asks a vision model
//! to identify each one, and writes the sprite manifest.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{Result, TiledexError};
use crate::labeler::{AnthropicConfig, AnthropicLabeler, Labeler};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{label_tileset, LabelOptions, LabelReport};
use crate::types::TilesetConfig;

/// Slice a tileset and label every tile with a vision model
#[derive(Args, Debug)]
pub struct LabelArgs {
    /// Tileset config (YAML with image, tileSize, gridWidth, gridHeight)
    #[arg(required = true)]
    pub config: PathBuf,

    /// Output manifest path
    #[arg(long, short, default_value = "sprites.json")]
    pub output: PathBuf,

    /// Directory for per-tile audit crops
    #[arg(long, default_value = "tiles")]
    pub tiles_dir: PathBuf,

    /// Do not write per-tile audit crops
    #[arg(long)]
    pub no_crops: bool,

    /// Model used to identify tiles
    #[arg(long)]
    pub model: Option<String>,
}

pub fn run(args: LabelArgs, printer: &Printer) -> Result<LabelReport> {
    let mut config = AnthropicConfig::from_env()?;
    if let Some(model) = &args.model {
        config = config.with_model(model.clone());
    }
    printer.info("Model", &config.model);

    let mut labeler = AnthropicLabeler::new(config);
    run_with(&args, &mut labeler, printer)
}

/// Run the label command with an explicit labeler.
pub fn run_with<L: Labeler + ?Sized>(
    args: &LabelArgs,
    labeler: &mut L,
    printer: &Printer,
) -> Result<LabelReport> {
    printer.status("Loading", &display_path(&args.config));
    let config = TilesetConfig::load(&args.config)?;

    let image = load_tileset(&config.image, printer)?;
    printer.info(
        "Grid",
        &format!(
            "{}x{} ({}, {}x{} px each)",
            config.grid_width,
            config.grid_height,
            plural(config.cell_count(), "tile", "tiles"),
            config.tile_size,
            config.tile_size
        ),
    );

    let options = LabelOptions {
        crop_dir: (!args.no_crops).then(|| args.tiles_dir.clone()),
    };
    let report = label_tileset(&config, &image, labeler, &options, printer);

    printer.status("Writing", &display_path(&args.output));
    let json = report.manifest.to_json_pretty()?;
    std::fs::write(&args.output, json).map_err(|e| TiledexError::Io {
        path: args.output.clone(),
        message: format!("Failed to write sprite manifest: {}", e),
    })?;

    printer.success(
        "Finished",
        &format!(
            "{} labeled, {} failed, {} empty skipped ({} in manifest)",
            report.labeled,
            report.failed,
            report.skipped,
            plural(report.manifest.sprites.len(), "sprite", "sprites")
        ),
    );

    Ok(report)
}

fn load_tileset(path: &Path, printer: &Printer) -> Result<image::RgbaImage> {
    let display = display_path(path);

    if !path.exists() {
        return Err(TiledexError::Io {
            path: path.to_path_buf(),
            message: format!("File not found: {}", display),
        });
    }

    printer.status("Loading", &display);

    let img = image::open(path)
        .map_err(|e| TiledexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to load image: {}", e),
        })?
        .to_rgba8();

    if img.width() == 0 || img.height() == 0 {
        return Err(TiledexError::Build {
            message: format!("Image has zero dimensions ({}x{})", img.width(), img.height()),
            help: Some("Tileset image must have non-zero width and height".to_string()),
        });
    }

    Ok(img)
}
