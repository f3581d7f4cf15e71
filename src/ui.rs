//! Terminal output. The version goes to stdout untouched; everything else goes
//! to stderr.

use std::io::{self, Write};

use console::style;

use crate::domain::Version;

/// Format an error message with a red `ERROR:` tag.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Write the rendered version with no trailing newline.
pub fn write_version<W: Write>(out: &mut W, version: &Version) -> io::Result<()> {
    write!(out, "{}", version)?;
    out.flush()
}
