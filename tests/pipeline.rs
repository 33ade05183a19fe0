//! End-to-end runs of label, convert and dedup over files on disk.

use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use tempfile::tempdir;
use tiledex::cli::convert::{self, ConvertArgs};
use tiledex::cli::dedup::{self, DedupArgs};
use tiledex::cli::label::{self, LabelArgs};
use tiledex::{GridPos, Label, Labeler, Printer, Result, SpriteKind, TiledexError};

/// Labels by row: row 0 walls, row 1 floors, anything at (2, 1) fails.
struct RowLabeler;

impl Labeler for RowLabeler {
    fn label(&mut self, _tile: &RgbaImage, pos: GridPos) -> Result<Label> {
        match (pos.x, pos.y) {
            (2, 1) => Err(TiledexError::Label {
                message: "connection reset".to_string(),
            }),
            (_, 0) => Ok(Label {
                id: "stone_wall".to_string(),
                name: "Stone Wall".to_string(),
                description: "Grey bricks.".to_string(),
                kind: SpriteKind::Wall,
                walkable: false,
            }),
            _ => Ok(Label {
                id: "dirt-floor".to_string(),
                name: "Dirt Floor".to_string(),
                description: "Packed earth.".to_string(),
                kind: SpriteKind::Floor,
                walkable: true,
            }),
        }
    }
}

/// 4x2 grid of 8px tiles; cell (3, 0) is transparent.
fn write_tileset(dir: &Path) -> std::path::PathBuf {
    let mut img = RgbaImage::from_pixel(32, 16, Rgba([60, 60, 60, 255]));
    for y in 0..8 {
        for x in 24..32 {
            img.put_pixel(x, y, Rgba([0, 0, 0, 0]));
        }
    }
    let path = dir.join("tileset_dungeon.png");
    img.save(&path).unwrap();
    path
}

#[test]
fn test_label_convert_dedup() {
    let dir = tempdir().unwrap();
    let image = write_tileset(dir.path());
    let config = dir.path().join("tileset.yaml");
    fs::write(
        &config,
        format!(
            "image: {}\ntileSize: 8\ngridWidth: 4\ngridHeight: 2\n",
            image.display()
        ),
    )
    .unwrap();

    let sprites = dir.path().join("sprites.json");
    let report = label::run_with(
        &LabelArgs {
            config,
            output: sprites.clone(),
            tiles_dir: dir.path().join("tiles"),
            no_crops: false,
            model: None,
        },
        &mut RowLabeler,
        &Printer::silent(),
    )
    .unwrap();

    assert_eq!(report.skipped, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.labeled, 6);
    assert_eq!(report.visited(), 8);
    assert_eq!(fs::read_dir(dir.path().join("tiles")).unwrap().count(), 8);

    let tiles = dir.path().join("tiles.json");
    let doc = convert::run(
        ConvertArgs {
            input: Some(sprites),
            output: Some(tiles.clone()),
            pretty: false,
        },
        &Printer::silent(),
    )
    .unwrap();

    let ids: Vec<&str> = doc.tiles.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "stone-wall-1",
            "stone-wall-2",
            "stone-wall-3",
            "dirt-floor-1",
            "dirt-floor-2",
            "tile-1-2-1",
            "dirt-floor-3",
        ]
    );
    for tile in &doc.tiles {
        assert_eq!((tile.x, tile.y), (tile.col as u64 * 8, tile.row as u64 * 8));
        assert_eq!((tile.w, tile.h), (8, 8));
    }

    let rerun = dir.path().join("tiles.dedup.json");
    let deduped = dedup::run(
        DedupArgs {
            input: Some(tiles),
            output: Some(rerun),
            pretty: true,
        },
        &Printer::silent(),
    )
    .unwrap();

    // Re-identifying already-unique ids appends another suffix.
    assert_eq!(deduped.tiles[0].id, "stone-wall-1-1");
    assert_eq!(deduped.tiles[5].id, "tile-1-2-1-1");
    assert_eq!(deduped.meta, doc.meta);
    for (after, before) in deduped.tiles.iter().zip(&doc.tiles) {
        assert_eq!(after.name, before.name);
        assert_eq!((after.x, after.y, after.row, after.col), (before.x, before.y, before.row, before.col));
        assert_eq!(after.kind, before.kind);
    }
}

#[test]
fn test_empty_manifest_converts_to_empty_tiles() {
    let dir = tempdir().unwrap();
    let sprites = dir.path().join("sprites.json");
    fs::write(
        &sprites,
        r#"{"tileSize": 64, "gridWidth": 16, "gridHeight": 16, "sprites": []}"#,
    )
    .unwrap();

    let tiles = dir.path().join("tiles.json");
    convert::run(
        ConvertArgs {
            input: Some(sprites),
            output: Some(tiles.clone()),
            pretty: false,
        },
        &Printer::silent(),
    )
    .unwrap();

    let deduped = dedup::run(
        DedupArgs {
            input: Some(tiles),
            output: None,
            pretty: false,
        },
        &Printer::silent(),
    )
    .unwrap();

    assert!(deduped.tiles.is_empty());
    assert_eq!(deduped.meta.origin, "top-left");
    assert_eq!(deduped.meta.pages[0].id, "dungeon");
    assert_eq!((deduped.meta.pages[0].cols, deduped.meta.pages[0].rows), (16, 16));
}
