//! Dedup command implementation.
//!
//! Re-identifies every tile of an existing tiles document so no two tiles
//! share an id.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::ids::IdCounter;
use crate::output::{plural, Printer};
use crate::pipeline::dedup_tiles;
use crate::types::TilesDocument;

/// Make every tile id in a tiles document unique
///
/// Known tile fields must keep their types: row, col, x, y, w and h are
/// non-negative integers, walkable is a boolean and type is one of the
/// sprite kinds. Keys tiledex does not know are passed through untouched.
#[derive(Args, Debug)]
pub struct DedupArgs {
    /// Tiles document to read (default: stdin)
    pub input: Option<PathBuf>,

    /// File to write the result to (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: DedupArgs, printer: &Printer) -> Result<TilesDocument> {
    let source = super::read_input(args.input.as_deref())?;
    let mut doc = TilesDocument::parse(&source)?;

    dedup_tiles(&mut doc, &mut IdCounter::new());
    super::write_output(args.output.as_ref(), &doc.to_json(args.pretty)?)?;

    printer.success("Renamed", &plural(doc.tiles.len(), "tile", "tiles"));
    Ok(doc)
}
