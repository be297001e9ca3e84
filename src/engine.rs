use crate::error::BundleError;
use crate::filter::{Selection, classify, is_ignored_dir};
use crate::options::BundleOptions;
use crate::output::{write_body, write_header, write_read_error};
use crate::types::{BundleReport, BundledFile};
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
struct SelectedFile {
    path: PathBuf,
    relative: PathBuf,
}
struct Walker {
    inner: ignore::Walk,
    options: BundleOptions,
}
impl Walker {
    fn new(options: &BundleOptions) -> Result<Self, BundleError> {
        check_root(&options.root)?;
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links)
            .sort_by_file_path(|a, b| files_first(a).cmp(&files_first(b)));
        let prune = options.clone();
        builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            entry.depth() == 0
                || !is_dir
                || !is_ignored_dir(&entry.file_name().to_string_lossy(), &prune)
        });
        Ok(Self {
            inner: builder.build(),
            options: options.clone(),
        })
    }
    fn into_selected(self) -> impl Iterator<Item = Result<SelectedFile, BundleError>> {
        let Walker { inner, options } = self;
        let mut seen_root = false;
        inner.filter_map(move |result| {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) if !seen_root => return Some(Err(BundleError::Walk(e.to_string()))),
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping unreadable entry: {}", _e);
                    return None;
                }
            };
            if entry.depth() == 0 {
                seen_root = true;
                return None;
            }
            let is_file = match entry.file_type() {
                Some(ft) if ft.is_file() => true,
                Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
                _ => false,
            };
            if !is_file {
                return None;
            }
            let selection = classify(&entry.file_name().to_string_lossy(), &options);
            match selection {
                Selection::Include => {
                    let path = entry.into_path();
                    let relative = path.strip_prefix(&options.root).unwrap_or(&path).to_path_buf();
                    Some(Ok(SelectedFile { path, relative }))
                }
                Selection::Skip(_reason) => {
                    #[cfg(feature = "logging")]
                    tracing::trace!("Skipping {} ({:?})", entry.path().display(), _reason);
                    None
                }
            }
        })
    }
}
/// Sort key placing a directory's files ahead of its subdirectories, each group by name.
fn files_first(path: &Path) -> (bool, Option<&OsStr>) {
    (path.is_dir(), path.file_name())
}
fn check_root(root: &Path) -> Result<(), BundleError> {
    let metadata = fs::metadata(root).map_err(|e| BundleError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(BundleError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|e| BundleError::io(root, e))?;
    Ok(())
}
fn read_file_content(path: &Path) -> Result<String, BundleError> {
    let bytes = fs::read(path).map_err(|e| BundleError::io(path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| BundleError::decode(path, e))?;
    Ok(normalize_newlines(content))
}
/// Rewrites `\r\n` and lone `\r` line endings as `\n`.
fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}
fn write_section<W: Write>(
    writer: &mut W,
    selected: SelectedFile,
) -> Result<BundledFile, BundleError> {
    write_header(writer, &selected.relative).map_err(BundleError::Write)?;
    match read_file_content(&selected.path) {
        Ok(content) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Bundling {}", selected.relative.display());
            write_body(writer, &content).map_err(BundleError::Write)?;
            Ok(BundledFile {
                relative_path: selected.relative,
                bytes: content.len() as u64,
                error: None,
            })
        }
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::warn!("Could not read {}: {}", selected.path.display(), e);
            write_read_error(writer, &e).map_err(BundleError::Write)?;
            Ok(BundledFile {
                relative_path: selected.relative,
                bytes: 0,
                error: Some(e.to_string()),
            })
        }
    }
}
fn write_sections<W: Write>(
    walker: Walker,
    writer: &mut W,
) -> Result<Vec<BundledFile>, BundleError> {
    let mut files = Vec::new();
    for selected in walker.into_selected() {
        files.push(write_section(writer, selected?)?);
    }
    Ok(files)
}
/// Bundles every selected file under `options.root` into `root/output_name`.
///
/// The output file is truncated on open, so a rerun fully replaces the
/// previous bundle. A file that cannot be read gets an inline placeholder
/// and the run continues; a missing or unreadable root, an output file that
/// cannot be created, or a failed write aborts the run.
pub fn merge(options: &BundleOptions) -> Result<BundleReport, BundleError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting bundle of root: {}", options.root.display());
    let walker = Walker::new(options)?;
    let output = options.output_path();
    let file = File::create(&output).map_err(|e| BundleError::io(&output, e))?;
    let mut writer = BufWriter::new(file);
    let files = write_sections(walker, &mut writer)?;
    writer.flush().map_err(BundleError::Write)?;
    #[cfg(feature = "logging")]
    tracing::info!("Wrote {} sections to {}", files.len(), output.display());
    Ok(BundleReport {
        output: Some(output),
        files,
    })
}
/// Same traversal and format as [`merge`], written to an arbitrary sink.
///
/// Nothing is created on disk. The report's `output` is `None`.
pub fn merge_into<W: Write>(
    options: &BundleOptions,
    writer: &mut W,
) -> Result<BundleReport, BundleError> {
    let walker = Walker::new(options)?;
    let files = write_sections(walker, writer)?;
    Ok(BundleReport {
        output: None,
        files,
    })
}
/// Relative paths [`merge`] would bundle, in bundle order. Reads no file content.
pub fn collect_paths(options: &BundleOptions) -> Result<Vec<PathBuf>, BundleError> {
    Walker::new(options)?
        .into_selected()
        .map(|res| res.map(|selected| selected.relative))
        .collect()
}
