//! The three manifest passes.
//!
//! Each pass reads one fully-buffered document, transforms it in memory and
//! hands back the result; file and stream handling lives in [`crate::cli`].

mod convert;
mod dedup;
mod label;

pub use convert::convert_manifest;
pub use dedup::dedup_tiles;
pub use label::{label_tileset, LabelOptions, LabelReport};
