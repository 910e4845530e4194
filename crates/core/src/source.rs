//! Numbered-folder discovery and source file reading.
//!
//! A content root holds numbered folders (`1/`, `2/`, ..., `10/`). Each
//! folder is one logical unit; the files picked from it are extracted in
//! name order and assembled into one section.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::{Result, SightlineError};

/// Extensions tried together when a folder has no html, md or txt files.
const FALLBACK_EXTENSIONS: [&str; 3] = ["htm", "markdown", "rst"];

/// How a source file's content is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// HTML, run through visible-text extraction.
    Markup,
    /// Anything else, used as-is after trimming.
    PlainText,
}

impl SourceKind {
    /// Markup for `.html`/`.htm` (any case), plain text otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => Self::Markup,
            _ => Self::PlainText,
        }
    }
}

/// A file picked from a unit folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub kind: SourceKind,
}

impl SourceFile {
    pub fn new(path: PathBuf) -> Self {
        let kind = SourceKind::from_path(&path);
        Self { path, kind }
    }
}

/// One numbered folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Folder name as found on disk (e.g. `"7"` or `"007"`)
    pub id: String,
    /// Numeric value of the folder name, used for ordering
    pub number: u64,
    /// Folder path
    pub path: PathBuf,
}

impl SourceUnit {
    /// Picks the files of this unit. See [`select_files`].
    pub fn files(&self) -> Result<Vec<SourceFile>> {
        Ok(select_files(&self.path)?.into_iter().map(SourceFile::new).collect())
    }
}

/// Finds the numbered folders directly under `root`, in numeric order.
///
/// Only names made of ASCII digits that fit a `u64` count. Folders with the
/// same value (`7` and `007`) are ordered by name.
///
/// # Errors
///
/// [`SightlineError::RootNotFound`] when `root` does not exist,
/// [`SightlineError::NotADirectory`] when it is a file, and
/// [`SightlineError::Io`] when it cannot be listed.
pub fn discover_units(root: &Path) -> Result<Vec<SourceUnit>> {
    if !root.exists() {
        return Err(SightlineError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(SightlineError::NotADirectory(root.to_path_buf()));
    }

    let mut units = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let Some(id) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let Ok(number) = id.parse::<u64>() else {
            debug!(folder = id, "skipping numbered folder outside u64 range");
            continue;
        };
        units.push(SourceUnit { id: id.to_string(), number, path });
    }

    units.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.id.cmp(&b.id)));
    debug!(root = %root.display(), units = units.len(), "discovered numbered folders");

    Ok(units)
}

/// Picks the representative files of a unit folder.
///
/// The first rule that yields anything wins:
/// 1. `index.html` alone;
/// 2. every `*.html`;
/// 3. every `*.md`;
/// 4. every `*.txt`;
/// 5. every `*.htm`, `*.markdown` and `*.rst`, together.
///
/// Each group is sorted by path. Extensions match case-sensitively.
pub fn select_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let index = dir.join("index.html");
    if index.is_file() {
        return Ok(vec![index]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    for ext in ["html", "md", "txt"] {
        let matched = with_extensions(&files, &[ext]);
        if !matched.is_empty() {
            return Ok(matched);
        }
    }

    Ok(with_extensions(&files, &FALLBACK_EXTENSIONS))
}

fn with_extensions(files: &[PathBuf], extensions: &[&str]) -> Vec<PathBuf> {
    files
        .iter()
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.contains(&ext))
        })
        .cloned()
        .collect()
}

/// Reads a source file as UTF-8, replacing undecodable bytes.
///
/// # Errors
///
/// [`SightlineError::ReadError`] when the file cannot be read.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| SightlineError::ReadError { path: path.to_path_buf(), source })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
