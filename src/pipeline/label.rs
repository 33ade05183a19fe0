//! Tileset slicing and labeling pass.

use std::path::PathBuf;

use image::RgbaImage;

use crate::labeler::Labeler;
use crate::output::{display_path, Printer};
use crate::slice::{crop_tile, is_empty_tile, save_crop};
use crate::types::{GridPos, Label, Sprite, SpriteManifest, TilesetConfig};

/// Side options for [`label_tileset`].
#[derive(Debug, Clone, Default)]
pub struct LabelOptions {
    /// Directory for per-tile audit crops. `None` disables them.
    pub crop_dir: Option<PathBuf>,
}

/// Result of a labeling pass.
#[derive(Debug, Clone)]
pub struct LabelReport {
    pub manifest: SpriteManifest,
    /// Tiles the labeler identified.
    pub labeled: usize,
    /// Tiles recorded with a placeholder label after the labeler failed.
    pub failed: usize,
    /// Empty tiles left out of the manifest.
    pub skipped: usize,
}

impl LabelReport {
    pub fn visited(&self) -> usize {
        self.labeled + self.failed + self.skipped
    }
}

/// Crop every grid cell of `image`, skip empty ones and label the rest.
///
/// Cells are visited in row-major order. A labeler error never aborts the
/// pass: the cell gets [`Label::placeholder`] instead.
pub fn label_tileset<L: Labeler + ?Sized>(
    config: &TilesetConfig,
    image: &RgbaImage,
    labeler: &mut L,
    options: &LabelOptions,
    printer: &Printer,
) -> LabelReport {
    let (grid_w, grid_h) = config.pixel_size();
    if (image.width() as u64) < grid_w || (image.height() as u64) < grid_h {
        printer.warning(
            "Warning",
            &format!(
                "Image is {}x{} but the grid covers {}x{}; missing pixels are treated as transparent",
                image.width(),
                image.height(),
                grid_w,
                grid_h
            ),
        );
    }

    let crop_dir = options.crop_dir.as_ref().filter(|dir| {
        match std::fs::create_dir_all(dir) {
            Ok(()) => true,
            Err(e) => {
                printer.warning(
                    "Warning",
                    &format!("Cannot create {}: {}; tile crops not saved", display_path(dir), e),
                );
                false
            }
        }
    });

    let total = config.cell_count();
    let mut sprites = Vec::new();
    let mut labeled = 0;
    let mut failed = 0;
    let mut skipped = 0;

    for y in 0..config.grid_height {
        for x in 0..config.grid_width {
            let pos = GridPos::new(x, y);
            let progress = format!("[{}/{}] {}", pos.index(config.grid_width) + 1, total, pos);

            let tile = crop_tile(image, pos, config.tile_size);

            if let Some(dir) = crop_dir {
                if let Err(e) = save_crop(&tile, dir, pos) {
                    printer.warning("Warning", &e.to_string());
                }
            }

            if is_empty_tile(&tile) {
                printer.info("Skipped", &format!("{} empty", progress));
                skipped += 1;
                continue;
            }

            let label = match labeler.label(&tile, pos) {
                Ok(label) => {
                    printer.status("Labeled", &format!("{} {}", progress, label.id));
                    labeled += 1;
                    label
                }
                Err(e) => {
                    printer.error("Failed", &format!("{} {}", progress, e));
                    failed += 1;
                    Label::placeholder(pos, config.grid_width)
                }
            };

            sprites.push(Sprite::from_label(label, pos));
        }
    }

    LabelReport {
        manifest: SpriteManifest {
            tile_size: config.tile_size,
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            sprites,
        },
        labeled,
        failed,
        skipped,
    }
}
