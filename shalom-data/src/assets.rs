//! Media asset index for matching records to files.
//!
//! Builds an in-memory, case-insensitive lookup from the set of discovered
//! media paths, keyed by lower-cased path. A record is matched by its type
//! (the `/{type}/` path segment) and its visual name.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shalom_core::VisualType;

/// File extensions treated as media assets (compared case-insensitively).
pub const MEDIA_EXTENSIONS: &[&str] = &["mp4", "png", "jpg", "jpeg", "webm"];

/// How a visual name is matched against candidate paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The lower-cased path contains the lower-cased visual name anywhere.
    #[default]
    Substring,
    /// The lower-cased file stem equals the lower-cased visual name.
    Stem,
}

/// An index of discovered media files, keyed by lower-cased path.
#[derive(Debug, Clone)]
pub struct AssetIndex {
    /// Lower-cased path -> path as discovered. Iteration is in ascending
    /// key order, which fixes which candidate wins when several match.
    by_lower: BTreeMap<String, String>,
}

impl AssetIndex {
    /// Build an index from discovered paths.
    ///
    /// Paths that differ only in case collapse to one entry; the first one
    /// seen is kept.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut by_lower = BTreeMap::new();
        for path in paths {
            let path = path.into();
            by_lower.entry(path.to_lowercase()).or_insert(path);
        }
        Self { by_lower }
    }

    /// An index with no files; every lookup misses.
    pub fn empty() -> Self {
        Self {
            by_lower: BTreeMap::new(),
        }
    }

    /// Look up the discovered path for a path in any casing.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.by_lower.get(&path.to_lowercase()).map(String::as_str)
    }

    /// Resolve a record's asset with the given match mode.
    pub fn resolve_with(&self, mode: MatchMode, visual_type: VisualType, visual_name: &str) -> &str {
        match mode {
            MatchMode::Substring => self.resolve(visual_type, visual_name),
            MatchMode::Stem => self.resolve_stem(visual_type, visual_name),
        }
    }

    /// First path under a `/{type}/` segment whose lower-cased form contains
    /// the lower-cased visual name, with surrounding whitespace ignored.
    /// Returns `""` when nothing matches or the name is blank.
    pub fn resolve(&self, visual_type: VisualType, visual_name: &str) -> &str {
        let name = visual_name.trim().to_lowercase();
        if name.is_empty() {
            return "";
        }
        let segment = type_segment(visual_type);

        self.by_lower
            .iter()
            .find(|(lower, _)| lower.contains(&segment) && lower.contains(&name))
            .map(|(_, path)| path.as_str())
            .unwrap_or("")
    }

    /// First path under a `/{type}/` segment whose file stem equals the
    /// visual name, ignoring case. Returns `""` when nothing matches.
    pub fn resolve_stem(&self, visual_type: VisualType, visual_name: &str) -> &str {
        let name = visual_name.trim().to_lowercase();
        if name.is_empty() {
            return "";
        }
        let segment = type_segment(visual_type);

        self.by_lower
            .iter()
            .find(|(lower, _)| {
                lower.contains(&segment)
                    && Path::new(lower.as_str())
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .is_some_and(|stem| stem == name)
            })
            .map(|(_, path)| path.as_str())
            .unwrap_or("")
    }

    /// All indexed paths, as discovered, in match order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.by_lower.values().map(String::as_str)
    }

    /// Returns the number of indexed files.
    pub fn len(&self) -> usize {
        self.by_lower.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.by_lower.is_empty()
    }
}

impl Default for AssetIndex {
    fn default() -> Self {
        Self::empty()
    }
}

fn type_segment(visual_type: VisualType) -> String {
    format!("/{}/", visual_type.short_name())
}

/// Discover media files under `root`.
///
/// Walks `root` recursively and returns every file whose extension is in
/// `extensions`, as a `/`-separated path rooted at the directory's own name
/// (`root = "./data"` yields `/data/1979/dove/poster.png`). The result is
/// sorted.
pub fn discover(root: &Path, extensions: &[&str]) -> std::io::Result<Vec<String>> {
    let prefix = root
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| format!("/{n}"))
        .unwrap_or_default();

    let mut files = Vec::new();
    collect_media_files(root, extensions, &mut files)?;

    let mut paths: Vec<String> = files
        .iter()
        .filter_map(|p| p.strip_prefix(root).ok())
        .map(|rel| {
            let rel: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            format!("{prefix}/{}", rel.join("/"))
        })
        .collect();
    paths.sort();

    log::debug!("Discovered {} media files under {}", paths.len(), root.display());
    Ok(paths)
}

fn collect_media_files(dir: &Path, extensions: &[&str], out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_media_files(&path, extensions, out)?;
        } else if path.is_file() && has_matching_extension(&path, extensions) {
            out.push(path);
        }
    }
    Ok(())
}

fn has_matching_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}
