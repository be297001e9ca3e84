//! # Flatcat
//!
//! `flatcat` walks a directory tree and concatenates every file whose name ends with one of a
//! set of extensions into a single text file. Each file is preceded by a delimiter block naming
//! its path relative to the root, so the result can be pasted into another tool as one artifact.
//!
//! Directories named in the ignore set (`node_modules`, `.git`, `build`, ...) are pruned at any
//! depth. The output file and the bundler itself are never included. A file that cannot be read
//! as UTF-8 text gets an inline `[Error reading file: ...]` placeholder instead of aborting the run.
//!
//! # Features
//!
//! - `logging` (default): emits `tracing` events for traversal and per-file read failures.
//!
//! # Example
//!
//! ```no_run
//! use flatcat::{BundleBuilder, merge};
//!
//! let options = BundleBuilder::new(".")
//!     .extensions([".rs", ".toml"])
//!     .ignore_dirs(["target", ".git"])
//!     .output_name("bundle.txt")
//!     .build();
//!
//! let report = merge(&options).expect("Failed to bundle directory");
//! for file in report.failed() {
//!     eprintln!("{}: {:?}", file.relative_path.display(), file.error);
//! }
//! ```

mod engine;
mod error;
pub mod filter;
mod options;
pub mod output;
mod types;

pub use engine::{collect_paths, merge, merge_into};
pub use error::BundleError;
pub use options::{
    BundleBuilder, BundleOptions, DEFAULT_EXTENSIONS, DEFAULT_IGNORE_DIRS, DEFAULT_OUTPUT_NAME,
};
pub use types::{BundleReport, BundledFile};
