pub mod completions;
pub mod convert;
pub mod dedup;
pub mod label;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::{Result, TiledexError};

/// tiledex - Tileset labeling and tile manifest tools
#[derive(Parser, Debug)]
#[command(name = "tiledex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Slice a tileset and label every tile with a vision model
    Label(label::LabelArgs),

    /// Convert a sprite manifest into a tiles document
    Convert(convert::ConvertArgs),

    /// Make every tile id in a tiles document unique
    ///
    /// Known tile fields must keep their types: row, col, x, y, w and h are
    /// non-negative integers, walkable is a boolean and type is one of the
    /// sprite kinds. Keys tiledex does not know are passed through untouched.
    Dedup(dedup::DedupArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Read a whole document from `input`, or stdin when it is absent or `-`.
pub(crate) fn read_input(input: Option<&Path>) -> Result<String> {
    match input.filter(|p| *p != Path::new("-")) {
        Some(path) => std::fs::read_to_string(path).map_err(|e| TiledexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read input: {}", e),
        }),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write a document to `output`, or stdout when it is absent.
pub(crate) fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|e| TiledexError::Io {
            path: path.clone(),
            message: format!("Failed to write output: {}", e),
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
