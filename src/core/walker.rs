// desclint - core/walker.rs
//
// Sample-tree traversal and per-sample error aggregation.
//
// A directory is a category directory only if its name is in the fixed
// category set; each of its immediate subdirectories is one sample.
// Per-sample failures are caught, printed, and counted; the walk never
// stops early. One aggregate error is raised at the end if any sample
// failed.

use crate::core::catalog::Catalog;
use crate::core::compare;
use crate::util::constants;
use crate::util::error::{DescLintError, Result};
use std::path::Path;

/// Check every sample under the collection root.
///
/// Inaccessible walk entries are logged and skipped; a failed directory
/// listing of a category directory is a fatal I/O error.
pub fn check_all(root: &Path, catalog: &Catalog) -> Result<()> {
    let mut failures = 0usize;

    for entry_result in walkdir::WalkDir::new(root).follow_links(false) {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(error = %e, "Cannot access walk entry, skipping");
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }
        let dir_name = entry.file_name().to_str().unwrap_or("");
        if !constants::CATEGORIES.contains(&dir_name) {
            continue;
        }

        tracing::debug!(category = dir_name, "Checking category directory");

        for sample_path in list_subdirectories(entry.path())? {
            // Git omits empty folders; a folder holding only filesystem
            // artifacts is treated the same way.
            if is_effectively_empty(&sample_path)? {
                tracing::debug!(
                    sample = %sample_path.display(),
                    "Empty sample folder, skipping"
                );
                continue;
            }

            if let Err(err) = compare::check_sample(catalog, &sample_path) {
                failures += 1;
                println!("{failures}. {err}");
            }
        }
    }

    if failures > 0 {
        Err(DescLintError::ChecksFailed { failures })
    } else {
        tracing::info!("All samples passed the description consistency check");
        Ok(())
    }
}

/// Immediate subdirectories of `dir`, in directory order.
fn list_subdirectories(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let read_dir = std::fs::read_dir(dir).map_err(|source| DescLintError::Io {
        path: dir.to_path_buf(),
        operation: "read_dir",
        source,
    })?;

    let mut subdirs = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| DescLintError::Io {
            path: dir.to_path_buf(),
            operation: "read_dir",
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        }
    }
    Ok(subdirs)
}

/// True when the folder contains nothing but ignorable filesystem
/// artifacts (entries whose names start with `.DS_Store`).
fn is_effectively_empty(dir: &Path) -> Result<bool> {
    let read_dir = std::fs::read_dir(dir).map_err(|source| DescLintError::Io {
        path: dir.to_path_buf(),
        operation: "read_dir",
        source,
    })?;

    for entry in read_dir {
        let entry = entry.map_err(|source| DescLintError::Io {
            path: dir.to_path_buf(),
            operation: "read_dir",
            source,
        })?;
        let name = entry.file_name();
        let is_artifact = name
            .to_str()
            .is_some_and(|n| n.starts_with(constants::IGNORABLE_ARTIFACT_PREFIX));
        if !is_artifact {
            return Ok(false);
        }
    }
    Ok(true)
}

// =============================================================================
// Tests
// =============================================================================
