//! Bundle file format.
//!
//! Each included file becomes one section:
//!
//! ```text
//!
//! ==================================================
//! FILE: src/app.tsx
//! ==================================================
//! <file content>
//! ```
//!
//! followed by a single newline after the content.

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

/// Width of the delimiter rule around the `FILE:` line.
pub const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Writes the three-line delimiter block, preceded by a blank line.
pub fn write_header<W: Write>(writer: &mut W, relative_path: &Path) -> io::Result<()> {
    let rule = rule();
    write!(
        writer,
        "\n{rule}\nFILE: {}\n{rule}\n",
        relative_path.display()
    )
}

/// Writes a file's content followed by a newline.
pub fn write_body<W: Write>(writer: &mut W, content: &str) -> io::Result<()> {
    writer.write_all(content.as_bytes())?;
    writer.write_all(b"\n")
}

/// Writes the placeholder standing in for content that could not be read.
pub fn write_read_error<W: Write>(writer: &mut W, error: &impl Display) -> io::Result<()> {
    writeln!(writer, "[Error reading file: {error}]")
}

/// Line printed once a run has completed.
pub fn success_notice(output_name: &str) -> String {
    format!("✅ Success! Check the file: {output_name}")
}

