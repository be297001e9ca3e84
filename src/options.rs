use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// File the bundle is written to, created inside the root directory.
pub const DEFAULT_OUTPUT_NAME: &str = "all_react_code.txt";
/// Suffixes eligible for inclusion. Matched as plain suffixes, case-sensitive.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx", ".css", ".html", ".json"];
/// Directory names pruned at any depth.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &["node_modules", ".git", ".next", "build", "dist", "coverage"];

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleOptions {
    pub root: PathBuf,
    pub extensions: BTreeSet<String>,
    pub ignore_dirs: BTreeSet<String>,
    pub output_name: String,
    /// Name of the bundler itself, never included in its own bundle.
    pub self_name: Option<String>,
    pub follow_links: bool,
}
impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: to_set(DEFAULT_EXTENSIONS),
            ignore_dirs: to_set(DEFAULT_IGNORE_DIRS),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            self_name: None,
            follow_links: false,
        }
    }
}
impl BundleOptions {
    /// Where the bundle lands: `output_name` inside `root`.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_name)
    }
}
#[derive(Debug, Default)]
pub struct BundleBuilder {
    options: BundleOptions,
}
impl BundleBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: BundleOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }
    pub fn ignore_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.ignore_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }
    pub fn output_name(mut self, name: impl Into<String>) -> Self {
        self.options.output_name = name.into();
        self
    }
    pub fn self_name(mut self, name: Option<String>) -> Self {
        self.options.self_name = name;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> BundleOptions {
        self.options
    }
}
