//! Sprite manifest to tiles document conversion.

use serde_json::Map;

use crate::ids::IdCounter;
use crate::types::{
    Page, SpriteManifest, Tile, TilesDocument, TilesMeta, COORDINATE_NOTE, DEFAULT_PAGE_FILE,
    DEFAULT_PAGE_ID, ORIGIN_TOP_LEFT,
};

/// Convert a labeled manifest into a tiles document.
///
/// Every sprite becomes one tile on the default page, with pixel geometry
/// derived from its grid cell and an id made unique through `ids`.
pub fn convert_manifest(manifest: &SpriteManifest, ids: &mut IdCounter) -> TilesDocument {
    let size = manifest.tile_size;

    let tiles = manifest
        .sprites
        .iter()
        .map(|sprite| Tile {
            id: ids.next(&sprite.id),
            page: DEFAULT_PAGE_ID.to_string(),
            name: sprite.name.clone(),
            row: sprite.grid_y,
            col: sprite.grid_x,
            x: sprite.grid_x as u64 * size as u64,
            y: sprite.grid_y as u64 * size as u64,
            w: size,
            h: size,
            kind: sprite.kind,
            walkable: sprite.walkable,
            description: sprite.description.clone(),
            extra: Map::new(),
        })
        .collect();

    TilesDocument {
        meta: TilesMeta {
            tile_width: size,
            tile_height: size,
            origin: ORIGIN_TOP_LEFT.to_string(),
            pages: vec![Page {
                id: DEFAULT_PAGE_ID.to_string(),
                file: DEFAULT_PAGE_FILE.to_string(),
                cols: manifest.grid_width,
                rows: manifest.grid_height,
                extra: Map::new(),
            }],
            note: COORDINATE_NOTE.to_string(),
            extra: Map::new(),
        },
        tiles,
        extra: Map::new(),
    }
}
