use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A single row in a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

impl Entry {
    /// Lowercased extension without the leading dot, if any.
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.path)
    }
}

pub(crate) fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Returns true when `path` has one of the `allowed` extensions.
///
/// Matching is case-insensitive and ignores a leading dot in the allow-list,
/// so `"md"` and `".MD"` are equivalent.
pub fn has_allowed_extension(path: &Path, allowed: &[String]) -> bool {
    let Some(ext) = extension_of(path) else {
        return false;
    };
    allowed
        .iter()
        .any(|a| a.trim_start_matches('.').eq_ignore_ascii_case(&ext))
}

/// Reads the immediate children of `dir`.
///
/// Directories come first, then files, each group ordered by name without
/// regard to case. Dot-files are skipped unless `show_hidden` is set.
pub fn read_entries(dir: &Path, show_hidden: bool) -> Result<Vec<Entry>> {
    if !dir.is_dir() {
        anyhow::bail!("Path '{}' is not a directory", dir.display());
    }

    let mut entries = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        let name = entry.file_name().to_string_lossy().into_owned();
        if !show_hidden && name.starts_with('.') {
            continue;
        }

        // Resolve symlinks so a link to a directory can be entered
        let is_dir = entry.file_type().is_dir() || entry.path().is_dir();

        entries.push(Entry {
            path: entry.into_path(),
            name,
            is_dir,
        });
    }

    entries.sort_by(compare_entries);
    Ok(entries)
}

fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}
