//! tiledex - Tileset labeling and tile manifest tools
//!
//! A library for slicing tileset images into tiles, labeling them with a
//! vision model, and reshaping the resulting sprite manifest into a tiles
//! document with unique ids.

pub mod cli;
pub mod error;
pub mod ids;
pub mod labeler;
pub mod output;
pub mod pipeline;
pub mod slice;
pub mod types;

pub use error::{Result, TiledexError};
pub use ids::{normalize_id, IdCounter};
pub use labeler::{AnthropicConfig, AnthropicLabeler, Labeler};
pub use output::Printer;
pub use pipeline::{convert_manifest, dedup_tiles, label_tileset, LabelOptions, LabelReport};
pub use slice::{crop_tile, is_empty_tile, ALPHA_THRESHOLD, MIN_COVERAGE_PERCENT};
pub use types::{
    GridPos, Label, Page, Sprite, SpriteKind, SpriteManifest, Tile, TilesDocument, TilesMeta,
    TilesetConfig,
};
