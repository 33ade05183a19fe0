//! Tile labeling collaborators.
//!
//! A [`Labeler`] looks at one cropped tile and returns a structured
//! [`Label`] for it. The labeling pass only depends on this trait, so the
//! vision provider can be swapped without touching pipeline logic.

mod anthropic;

pub use anthropic::{parse_label_response, tile_prompt, AnthropicConfig, AnthropicLabeler};

use image::RgbaImage;

use crate::error::Result;
use crate::types::{GridPos, Label};

/// Something that can identify a tile.
pub trait Labeler {
    /// Label the `tile` found at grid cell `pos`.
    fn label(&mut self, tile: &RgbaImage, pos: GridPos) -> Result<Label>;
}

impl<L: Labeler + ?Sized> Labeler for Box<L> {
    fn label(&mut self, tile: &RgbaImage, pos: GridPos) -> Result<Label> {
        (**self).label(tile, pos)
    }
}
