//! Tileset configuration (YAML).
//!
//! Describes where the tileset image lives and how it is divided into a
//! grid of square tiles. Every key is required.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TiledexError};

/// Grid layout of a tileset image, loaded from a YAML config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TilesetConfig {
    /// Path to the tileset image.
    pub image: PathBuf,
    /// Pixels per side of a square tile.
    pub tile_size: u32,
    /// Number of tile columns.
    pub grid_width: u32,
    /// Number of tile rows.
    pub grid_height: u32,
}

impl TilesetConfig {
    /// Load a config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TiledexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse and validate a config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: TilesetConfig =
            serde_yaml::from_str(content).map_err(|e| TiledexError::Config {
                message: format!("Invalid tileset config: {}", e),
                help: Some(
                    "The config needs `image`, `tileSize`, `gridWidth` and `gridHeight`"
                        .to_string(),
                ),
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("tileSize", self.tile_size),
            ("gridWidth", self.grid_width),
            ("gridHeight", self.grid_height),
        ] {
            if value == 0 {
                return Err(TiledexError::Config {
                    message: format!("`{}` must be a positive integer, got 0", key),
                    help: None,
                });
            }
        }
        Ok(())
    }

    /// Total number of grid cells.
    pub fn cell_count(&self) -> usize {
        self.grid_width as usize * self.grid_height as usize
    }

    /// Pixel size the grid covers: (width, height).
    pub fn pixel_size(&self) -> (u64, u64) {
        (
            self.grid_width as u64 * self.tile_size as u64,
            self.grid_height as u64 * self.tile_size as u64,
        )
    }
}
