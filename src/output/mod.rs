//! Output formatting module.
//!
//! Result lines go to the wrapped writer (stdout in the binary), one per
//! attempt, flushed immediately. Diagnostics go to stderr.

mod json_format;
mod plain;

pub use json_format::format_json;
pub use plain::format_line;

use crate::prober::ProbeResult;
use console::style;
use std::io::{self, Write};

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// key=value status lines
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Writes each probe result as soon as it is produced.
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Write one result line and flush.
    pub fn report(&mut self, result: &ProbeResult) -> io::Result<()> {
        let line = match self.format {
            OutputFormat::Plain => format_line(result),
            OutputFormat::Json => format_json(result).map_err(io::Error::other)?,
        };
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}
