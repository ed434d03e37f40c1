//! Output formatting for line and JSON modes
//!
//! Line mode is the contract build generators consume: one path per line and
//! nothing else. JSON mode is opt-in for tooling that wants structure.

use std::io::{self, Write};

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Newline-delimited paths (default)
    #[default]
    Lines,
    /// JSON output (machine-readable)
    Json,
}

/// Result of expanding a single pattern
#[derive(Debug, Serialize)]
pub struct Expansion {
    /// The pattern as given on the command line
    pub pattern: String,
    /// Normalized matches in expansion order
    pub matches: Vec<String>,
}

impl Expansion {
    /// Write the result to `out` based on output mode
    pub fn write_to<W: Write>(&self, mode: OutputMode, out: &mut W) -> io::Result<()> {
        match mode {
            OutputMode::Lines => self.write_lines(out),
            OutputMode::Json => self.write_json(out),
        }
    }

    fn write_lines<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for m in &self.matches {
            writeln!(out, "{m}")?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}
