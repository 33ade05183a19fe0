//! Convert command implementation.
//!
//! Reads a sprite manifest and writes the equivalent tiles document.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::ids::IdCounter;
use crate::output::{plural, Printer};
use crate::pipeline::convert_manifest;
use crate::types::{SpriteManifest, TilesDocument};

/// Convert a sprite manifest into a tiles document
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Sprite manifest to read (default: stdin)
    pub input: Option<PathBuf>,

    /// File to write the tiles document to (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<TilesDocument> {
    let source = super::read_input(args.input.as_deref())?;
    let manifest = SpriteManifest::parse(&source)?;

    for sprite in manifest.out_of_bounds() {
        printer.warning(
            "Warning",
            &format!(
                "Sprite '{}' at {} lies outside the {}x{} grid",
                sprite.id,
                sprite.pos(),
                manifest.grid_width,
                manifest.grid_height
            ),
        );
    }

    let doc = convert_manifest(&manifest, &mut IdCounter::new());
    super::write_output(args.output.as_ref(), &doc.to_json(args.pretty)?)?;

    printer.success(
        "Converted",
        &plural(doc.tiles.len(), "tile", "tiles"),
    );
    Ok(doc)
}
