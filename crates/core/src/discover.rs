// src/discover.rs
//! Filesystem discovery for the interactive selection flow.
//!
//! The CLI presents numbered menus of candidate data files and templates.
//! Discovery is deliberately shallow: one directory level, matched by
//! extension, sorted by path so menu numbering is stable across runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extensions recognized as invoice data sources.
const DATA_EXTENSIONS: &[&str] = &["csv", "json"];
/// Extensions recognized as markup templates.
const TEMPLATE_EXTENSIONS: &[&str] = &["html"];

/// Lists candidate data files (`.csv` and `.json`) in `dir`, sorted.
pub fn list_data_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    list_by_extension(dir, DATA_EXTENSIONS)
}

/// Lists candidate template files (`.html`) in `dir`, sorted.
pub fn list_template_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    list_by_extension(dir, TEMPLATE_EXTENSIONS)
}

/// A missing directory yields an empty list, not an error; the caller
/// reports "nothing found" either way.
fn list_by_extension(dir: &Path, extensions: &[&str]) -> io::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                extensions.iter().any(|candidate| *candidate == ext)
            });
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
