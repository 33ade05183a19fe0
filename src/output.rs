//! Operator-facing progress lines.
//!
//! Every line is a verb followed by a message, with verbs right-aligned so
//! tile progress reads as a column. Lines go to stderr; stdout carries the
//! JSON documents `convert` and `dedup` emit.

use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Column the verbs are right-aligned to.
const VERB_WIDTH: usize = 12;

/// Writes progress lines for a tiledex run.
///
/// ANSI colour is used only when stderr is a terminal.
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    /// A printer that drops every line.
    pub fn silent() -> Self {
        Self {
            color: false,
            quiet: true,
        }
    }

    /// Work in progress, such as `Loading tileset.yaml` or `Labeled [3/64] (2, 0) stone_wall`.
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// End-of-run summary.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Facts about the input, such as the grid size or a skipped empty tile.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Something odd that does not stop the run.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// A tile the labeler could not identify.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        if self.quiet {
            return;
        }
        let color = self.color.then_some(color);
        let _ = writeln!(io::stderr().lock(), "{}", format_line(color, verb, message));
    }
}

/// Render one line, colouring the verb when `color` is given.
fn format_line(color: Option<&str>, verb: &str, message: &str) -> String {
    match color {
        Some(color) => format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"),
        None => format!("{verb:>VERB_WIDTH$} {message}"),
    }
}

/// Count with the matching noun: `plural(1, "tile", "tiles")` gives "1 tile".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Path relative to the working directory when it lies below it.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}
