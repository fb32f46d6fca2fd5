//! File driver: expand patterns, read files, scan and merge in order.

use crate::merge;
use crate::model::{ModuleIndex, Scan};
use crate::parser;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions picked up when a directory is given.
const SUPPORTED_EXTENSIONS: &[&str] = &["asn", "asn1"];

/// Files resolved from a list of path/glob arguments.
#[derive(Debug, Default)]
pub struct Expansion {
    pub files: Vec<PathBuf>,
    /// Glob patterns that matched no file.
    pub unmatched: Vec<String>,
}

/// Expand file paths, directories and glob patterns into real files.
///
/// Argument order is kept so that later arguments win when the same
/// `(module, type)` is defined twice; a repeated file keeps its first slot.
pub fn expand_patterns(patterns: &[String]) -> Result<Expansion> {
    let mut out = Expansion::default();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            push_unique(&mut out.files, path.to_path_buf());
            continue;
        }
        // Directories are scanned non-recursively.
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            let mut found = Vec::new();
            for entry in entries {
                let entry = entry
                    .with_context(|| format!("failed to read directory: {}", path.display()))?;
                let p = entry.path();
                if p.is_file() && has_supported_extension(&p) {
                    found.push(p);
                }
            }
            found.sort();
            for p in found {
                push_unique(&mut out.files, p);
            }
            continue;
        }
        let mut matches = Vec::new();
        for entry in glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
        {
            let p = entry.with_context(|| format!("failed to read glob match for {}", pattern))?;
            if p.is_file() {
                matches.push(p);
            }
        }
        if matches.is_empty() {
            out.unmatched.push(pattern.clone());
        }
        for p in matches {
            push_unique(&mut out.files, p);
        }
    }
    Ok(out)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

fn push_unique(files: &mut Vec<PathBuf>, path: PathBuf) {
    if !files.contains(&path) {
        files.push(path);
    }
}

/// Read and scan a single file.
pub fn scan_file(path: &Path) -> Result<Scan> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(parser::parse_source(&content))
}

/// Scan files in order; the first unreadable file aborts the run.
pub fn scan_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<(PathBuf, Scan)>> {
    paths
        .iter()
        .map(|p| {
            let path = p.as_ref();
            scan_file(path).map(|scan| (path.to_path_buf(), scan))
        })
        .collect()
}

/// Fold each scan into a per-file index, then merge them in order.
pub fn build_index<I>(scans: I) -> ModuleIndex
where
    I: IntoIterator<Item = Scan>,
{
    merge::merge_all(scans.into_iter().map(|s| merge::fold(s.records)))
}

/// Parse the given files into one index.
pub fn parse_files<P: AsRef<Path>>(paths: &[P]) -> Result<ModuleIndex> {
    let scans = scan_files(paths)?;
    Ok(build_index(scans.into_iter().map(|(_, scan)| scan)))
}

/// Parse every file matching a glob pattern.
pub fn parse_glob(pattern: &str) -> Result<ModuleIndex> {
    let expansion = expand_patterns(&[pattern.to_string()])?;
    parse_files(&expansion.files)
}
