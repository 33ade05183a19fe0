//! The placement-ready "tiles" document.
//!
//! Each [`Tile`] carries a globally unique id and its pixel rectangle on a
//! named page. Keys this crate does not model are kept in `extra` so a
//! document can be read, re-identified and written back without loss.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, TiledexError};

use super::SpriteKind;

/// Page id every converted tile points at.
pub const DEFAULT_PAGE_ID: &str = "dungeon";

/// Image file backing the default page.
pub const DEFAULT_PAGE_FILE: &str = "tileset_dungeon.png";

/// Coordinate origin recorded in `meta.origin`.
pub const ORIGIN_TOP_LEFT: &str = "top-left";

/// Explanation of the pixel coordinates recorded in `meta.note`.
pub const COORDINATE_NOTE: &str =
    "x,y are computed as col*tileWidth, row*tileHeight on each page.";

/// A named source image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub file: String,
    pub cols: u32,
    pub rows: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TilesMeta {
    pub tile_width: u32,
    pub tile_height: u32,
    pub origin: String,
    pub pages: Vec<Page>,
    pub note: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: String,
    pub page: String,
    pub name: String,
    pub row: u32,
    pub col: u32,
    /// Pixel offsets on the page. Wider than the grid types so
    /// `col * tileWidth` cannot overflow.
    pub x: u64,
    pub y: u64,
    pub w: u32,
    pub h: u32,
    #[serde(rename = "type")]
    pub kind: SpriteKind,
    pub walkable: bool,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilesDocument {
    pub meta: TilesMeta,
    pub tiles: Vec<Tile>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TilesDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TiledexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read tiles document: {}", e),
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| TiledexError::Parse {
            message: format!("Invalid tiles document: {}", e),
            help: Some(
                "Expected {meta: {...}, tiles: [...]} with integer row/col/x/y/w/h on every tile"
                    .to_string(),
            ),
        })
    }

    /// Serialize as compact JSON, or indented when `pretty` is set.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.map_err(|e| TiledexError::Build {
            message: format!("Failed to serialize tiles document: {}", e),
            help: None,
        })
    }
}
