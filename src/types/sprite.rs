//! Sprite labels and the sprite manifest.
//!
//! A [`Label`] is what the vision collaborator says about one tile. Attaching
//! a grid position turns it into a [`Sprite`]; a [`SpriteManifest`] is the
//! ordered list of sprites written by `tiledex label`.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TiledexError};

/// Category of a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteKind {
    Floor,
    Wall,
    Door,
    Decoration,
    Character,
    Item,
    Other,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 7] = [
        SpriteKind::Floor,
        SpriteKind::Wall,
        SpriteKind::Door,
        SpriteKind::Decoration,
        SpriteKind::Character,
        SpriteKind::Item,
        SpriteKind::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SpriteKind::Floor => "floor",
            SpriteKind::Wall => "wall",
            SpriteKind::Door => "door",
            SpriteKind::Decoration => "decoration",
            SpriteKind::Character => "character",
            SpriteKind::Item => "item",
            SpriteKind::Other => "other",
        }
    }
}

impl fmt::Display for SpriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Zero-based grid cell: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Row-major index of this cell in a grid `grid_width` columns wide.
    pub fn index(&self, grid_width: u32) -> usize {
        self.y as usize * grid_width as usize + self.x as usize
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Structured description of a single tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: SpriteKind,
    pub walkable: bool,
}

impl Label {
    /// Label recorded for a tile the collaborator failed to identify.
    pub fn placeholder(pos: GridPos, grid_width: u32) -> Self {
        Self {
            id: format!("tile_{}_{}", pos.y, pos.x),
            name: format!("Tile {}", pos.index(grid_width)),
            description: "Failed to identify".to_string(),
            kind: SpriteKind::Other,
            walkable: false,
        }
    }
}

/// A labeled grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprite {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: SpriteKind,
    pub walkable: bool,
    pub grid_x: u32,
    pub grid_y: u32,
}

impl Sprite {
    pub fn from_label(label: Label, pos: GridPos) -> Self {
        Self {
            id: label.id,
            name: label.name,
            description: label.description,
            kind: label.kind,
            walkable: label.walkable,
            grid_x: pos.x,
            grid_y: pos.y,
        }
    }

    pub fn pos(&self) -> GridPos {
        GridPos::new(self.grid_x, self.grid_y)
    }
}

/// Output of the labeling pass: grid metadata plus sprites in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteManifest {
    pub tile_size: u32,
    pub grid_width: u32,
    pub grid_height: u32,
    pub sprites: Vec<Sprite>,
}

impl SpriteManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TiledexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read sprite manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| TiledexError::Parse {
            message: format!("Invalid sprite manifest: {}", e),
            help: Some(
                "Expected {tileSize, gridWidth, gridHeight, sprites: [...]}".to_string(),
            ),
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| TiledexError::Build {
            message: format!("Failed to serialize sprite manifest: {}", e),
            help: None,
        })
    }

    /// Sprites whose grid position lies outside the manifest's grid.
    pub fn out_of_bounds(&self) -> Vec<&Sprite> {
        self.sprites
            .iter()
            .filter(|s| s.grid_x >= self.grid_width || s.grid_y >= self.grid_height)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_label_parses_type_field() {
        let json = r#"{"id":"stone_wall","name":"Stone Wall","description":"A wall.","type":"wall","walkable":false}"#;
        let label: Label = serde_json::from_str(json).unwrap();
        assert_eq!(label.kind, SpriteKind::Wall);
        assert_eq!(label.id, "stone_wall");
        assert!(!label.walkable);
    }

    #[test]
    fn test_label_rejects_unknown_type() {
        let json = r#"{"id":"x","name":"X","description":"","type":"lava","walkable":false}"#;
        assert!(serde_json::from_str::<Label>(json).is_err());
    }

    #[test]
    fn test_placeholder() {
        let label = Label::placeholder(GridPos::new(3, 2), 16);
        assert_eq!(label.id, "tile_2_3");
        assert_eq!(label.name, "Tile 35");
        assert_eq!(label.description, "Failed to identify");
        assert_eq!(label.kind, SpriteKind::Other);
        assert!(!label.walkable);
    }

    #[test]
    fn test_sprite_serializes_camel_case() {
        let sprite = Sprite::from_label(Label::placeholder(GridPos::new(1, 0), 4), GridPos::new(1, 0));
        let json = serde_json::to_string(&sprite).unwrap();
        assert_eq!(
            json,
            r#"{"id":"tile_0_1","name":"Tile 1","description":"Failed to identify","type":"other","walkable":false,"gridX":1,"gridY":0}"#
        );
    }

    #[test]
    fn test_manifest_ignores_extra_sprite_keys() {
        let json = r#"{
            "tileSize": 32, "gridWidth": 2, "gridHeight": 1,
            "sprites": [{"id":"door","name":"Door","description":"d","type":"door",
                         "walkable":true,"gridX":1,"gridY":0,"confidence":0.9}]
        }"#;
        let manifest = SpriteManifest::parse(json).unwrap();
        assert_eq!(manifest.sprites.len(), 1);
        assert_eq!(manifest.sprites[0].pos(), GridPos::new(1, 0));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut manifest = SpriteManifest {
            tile_size: 16,
            grid_width: 2,
            grid_height: 2,
            sprites: vec![],
        };
        for (x, y) in [(0, 0), (2, 0), (1, 2)] {
            manifest.sprites.push(Sprite::from_label(
                Label::placeholder(GridPos::new(x, y), 2),
                GridPos::new(x, y),
            ));
        }
        let bad: Vec<GridPos> = manifest.out_of_bounds().iter().map(|s| s.pos()).collect();
        assert_eq!(bad, vec![GridPos::new(2, 0), GridPos::new(1, 2)]);
    }

    #[test]
    fn test_kind_names_round_trip_through_serde() {
        for kind in SpriteKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_invalid_manifest_is_parse_error() {
        let err = SpriteManifest::parse("{\"sprites\": []}").unwrap_err();
        assert!(matches!(err, TiledexError::Parse { .. }));
    }
}
