//! Tile cropping and coverage checks.
//!
//! Cuts square tiles out of a tileset image, decides whether a tile has
//! enough visible pixels to be worth labeling, and encodes crops as PNG.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::{Result, TiledexError};
use crate::types::GridPos;

/// Alpha values at or below this count as transparent.
pub const ALPHA_THRESHOLD: u8 = 10;

/// Tiles with fewer visible pixels than this percentage are empty.
pub const MIN_COVERAGE_PERCENT: u64 = 5;

/// Crop the tile at `pos` from `img`.
///
/// The result is always `tile_size` square. Any part of the cell that falls
/// outside the source image is left transparent.
pub fn crop_tile(img: &RgbaImage, pos: GridPos, tile_size: u32) -> RgbaImage {
    let mut tile = RgbaImage::from_pixel(tile_size, tile_size, Rgba([0, 0, 0, 0]));

    let left = pos.x as u64 * tile_size as u64;
    let top = pos.y as u64 * tile_size as u64;
    if left >= img.width() as u64 || top >= img.height() as u64 {
        return tile;
    }
    let (left, top) = (left as u32, top as u32);

    // Clamp for cells on a partial edge
    let w = tile_size.min(img.width() - left);
    let h = tile_size.min(img.height() - top);

    let sub = image::imageops::crop_imm(img, left, top, w, h).to_image();
    image::imageops::replace(&mut tile, &sub, 0, 0);
    tile
}

/// Count pixels whose alpha exceeds [`ALPHA_THRESHOLD`].
pub fn opaque_pixels(tile: &RgbaImage) -> u64 {
    tile.pixels().filter(|p| p[3] > ALPHA_THRESHOLD).count() as u64
}

/// Returns true if fewer than [`MIN_COVERAGE_PERCENT`] of the pixels are visible.
pub fn is_empty_tile(tile: &RgbaImage) -> bool {
    let total = tile.width() as u64 * tile.height() as u64;
    opaque_pixels(tile) * 100 < total * MIN_COVERAGE_PERCENT
}

/// Encode a tile as PNG bytes.
pub fn encode_png(tile: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    tile.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| TiledexError::Build {
            message: format!("Failed to encode tile as PNG: {}", e),
            help: None,
        })?;
    Ok(buf.into_inner())
}

/// Audit file path for the crop at `pos`: `tile_{row}_{col}.png`.
pub fn crop_path(dir: &Path, pos: GridPos) -> PathBuf {
    dir.join(format!("tile_{}_{}.png", pos.y, pos.x))
}

/// Write the crop at `pos` into `dir`.
pub fn save_crop(tile: &RgbaImage, dir: &Path, pos: GridPos) -> Result<PathBuf> {
    let path = crop_path(dir, pos);
    tile.save(&path).map_err(|e| TiledexError::Io {
        path: path.clone(),
        message: format!("Failed to write tile crop: {}", e),
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn test_crop_tile_in_bounds() {
        // 4x2 image: left half red, right half clear
        let mut img = RgbaImage::from_pixel(4, 2, CLEAR);
        for y in 0..2 {
            for x in 0..2 {
                img.put_pixel(x, y, RED);
            }
        }

        let left = crop_tile(&img, GridPos::new(0, 0), 2);
        let right = crop_tile(&img, GridPos::new(1, 0), 2);

        assert_eq!(left.dimensions(), (2, 2));
        assert!(left.pixels().all(|p| *p == RED));
        assert!(right.pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn test_crop_tile_partial_edge_is_padded() {
        // 3x3 image, 2x2 tiles: cell (1, 1) has a single real pixel
        let img = RgbaImage::from_pixel(3, 3, RED);
        let tile = crop_tile(&img, GridPos::new(1, 1), 2);

        assert_eq!(tile.dimensions(), (2, 2));
        assert_eq!(*tile.get_pixel(0, 0), RED);
        assert_eq!(*tile.get_pixel(1, 0), CLEAR);
        assert_eq!(*tile.get_pixel(0, 1), CLEAR);
        assert_eq!(*tile.get_pixel(1, 1), CLEAR);
    }

    #[test]
    fn test_crop_tile_outside_image() {
        let img = RgbaImage::from_pixel(2, 2, RED);
        let tile = crop_tile(&img, GridPos::new(5, 5), 2);
        assert_eq!(tile.dimensions(), (2, 2));
        assert!(is_empty_tile(&tile));
    }

    #[test]
    fn test_fully_transparent_is_empty() {
        let tile = RgbaImage::from_pixel(8, 8, CLEAR);
        assert_eq!(opaque_pixels(&tile), 0);
        assert!(is_empty_tile(&tile));
    }

    #[test]
    fn test_low_alpha_pixels_do_not_count() {
        let tile = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, ALPHA_THRESHOLD]));
        assert_eq!(opaque_pixels(&tile), 0);
        assert!(is_empty_tile(&tile));
    }

    #[test]
    fn test_coverage_boundary() {
        // 10x10 = 100 pixels; 5% is exactly 5 visible pixels
        let mut tile = RgbaImage::from_pixel(10, 10, CLEAR);
        for x in 0..4 {
            tile.put_pixel(x, 0, RED);
        }
        assert!(is_empty_tile(&tile));

        tile.put_pixel(4, 0, RED);
        assert_eq!(opaque_pixels(&tile), 5);
        assert!(!is_empty_tile(&tile));
    }

    #[test]
    fn test_opaque_tile_not_empty() {
        let tile = RgbaImage::from_pixel(4, 4, RED);
        assert!(!is_empty_tile(&tile));
    }

    #[test]
    fn test_encode_png_signature() {
        let tile = RgbaImage::from_pixel(4, 4, RED);
        let bytes = encode_png(&tile).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, tile);
    }

    #[test]
    fn test_crop_path() {
        let path = crop_path(Path::new("tiles"), GridPos::new(3, 7));
        assert_eq!(path, PathBuf::from("tiles/tile_7_3.png"));
    }

    #[test]
    fn test_save_crop() {
        let dir = tempfile::tempdir().unwrap();
        let tile = RgbaImage::from_pixel(4, 4, RED);
        let path = save_crop(&tile, dir.path(), GridPos::new(1, 2)).unwrap();

        assert!(path.ends_with("tile_2_1.png"));
        assert!(path.exists());
    }

    #[test]
    fn test_save_crop_missing_dir() {
        let tile = RgbaImage::from_pixel(4, 4, RED);
        let err = save_crop(&tile, Path::new("/nonexistent/tiles"), GridPos::new(0, 0));
        assert!(matches!(err, Err(TiledexError::Io { .. })));
    }
}
