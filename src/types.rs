use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One section written to the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundledFile {
    /// Path relative to the traversal root, as shown on the `FILE:` line.
    pub relative_path: PathBuf,
    /// Number of content bytes written, excluding the header and trailing newline.
    ///
    /// Zero when the content could not be read.
    pub bytes: u64,
    /// Read failure recorded in place of the content, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Summary of a completed bundling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleReport {
    /// The bundle file, or `None` when the sections went to a caller-supplied writer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Sections in the order they were written.
    pub files: Vec<BundledFile>,
}

impl BundleReport {
    /// Sections whose content was replaced by an error placeholder.
    pub fn failed(&self) -> impl Iterator<Item = &BundledFile> {
        self.files.iter().filter(|f| f.error.is_some())
    }
}
