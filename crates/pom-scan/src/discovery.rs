//! Walks the given roots for documents a cataloger accepts.

use crate::config::ScanConfig;
use pom_catalog::Cataloger;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Returns matching files, sorted by name within each root.
///
/// Unreadable entries and oversized files are logged and skipped.
pub fn discover(
    roots: &[PathBuf],
    config: &ScanConfig,
    cataloger: &dyn Cataloger,
) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for root in roots {
        let walker = WalkDir::new(root)
            .follow_links(config.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_excluded(entry, &config.exclude));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(%err, "skipping unreadable path");
                    continue;
                }
            };

            if !entry.file_type().is_file() || !cataloger.matches(entry.path()) {
                continue;
            }
            if exceeds_size_limit(entry.path(), config.max_file_size) {
                continue;
            }
            found.push(entry.into_path());
        }
    }

    found
}

fn is_excluded(entry: &DirEntry, exclude: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude.iter().any(|excluded| excluded == name))
}

fn exceeds_size_limit(path: &Path, limit: u64) -> bool {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.len() > limit => {
            tracing::warn!(
                path = %path.display(),
                size = metadata.len(),
                limit,
                "skipping document above size limit"
            );
            true
        }
        // Read errors surface later, per document
        _ => false,
    }
}
