//! Shared data model: tileset config, sprite manifest and tiles document.

mod config;
mod sprite;
mod tiles;

pub use config::TilesetConfig;
pub use sprite::{GridPos, Label, Sprite, SpriteKind, SpriteManifest};
pub use tiles::{
    Page, Tile, TilesDocument, TilesMeta, COORDINATE_NOTE, DEFAULT_PAGE_FILE, DEFAULT_PAGE_ID,
    ORIGIN_TOP_LEFT,
};
