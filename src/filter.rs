//! Selection rules deciding which directories are entered and which files
//! end up in the bundle.
//!
//! All predicates work on bare file names, never on full paths, so a rule
//! applies the same way at every depth of the tree.

use crate::options::BundleOptions;

/// Why a file was left out of the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The file carries the output file's name.
    OutputFile,
    /// The file carries the bundler's own name.
    SelfSource,
    /// No configured extension is a suffix of the name.
    Extension,
}

/// Outcome of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Include,
    Skip(SkipReason),
}

impl Selection {
    pub fn is_included(&self) -> bool {
        matches!(self, Selection::Include)
    }
}

/// Returns `true` if a directory with this name must not be descended into.
pub fn is_ignored_dir(name: &str, options: &BundleOptions) -> bool {
    options.ignore_dirs.contains(name)
}

/// Plain, case-sensitive suffix test against the extension allow-list.
///
/// `component.test.tsx` and a file named just `.tsx` both match `.tsx`.
pub fn matches_extension(name: &str, options: &BundleOptions) -> bool {
    options.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Decides whether a file with this name belongs in the bundle.
///
/// The output and self-name checks run before the extension check.
pub fn classify(name: &str, options: &BundleOptions) -> Selection {
    if name == options.output_name {
        return Selection::Skip(SkipReason::OutputFile);
    }
    if options.self_name.as_deref() == Some(name) {
        return Selection::Skip(SkipReason::SelfSource);
    }
    if !matches_extension(name, options) {
        return Selection::Skip(SkipReason::Extension);
    }
    Selection::Include
}
