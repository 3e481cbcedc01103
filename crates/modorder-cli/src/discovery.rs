//! Source file enumeration.
//!
//! Directories are walked in the order they are configured: every shallow
//! directory first, then every recursive one. Within a directory entries are
//! visited sorted by file name, so the discovery order (and with it the
//! build order) does not depend on the filesystem.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use modorder_config::{DEFAULT_SOURCE_DIR, ScanConfig};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::{DiscoveryError, Result};

/// One directory to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRoot {
    pub dir: PathBuf,
    pub recursive: bool,
}

/// Directories to scan, in scan order.
///
/// Falls back to `src`, non-recursively, when nothing is configured.
pub fn scan_roots(scan: &ScanConfig) -> Vec<ScanRoot> {
    if !scan.has_dirs() {
        return vec![ScanRoot {
            dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            recursive: false,
        }];
    }

    let shallow = scan.dirs.iter().map(|dir| ScanRoot {
        dir: dir.clone(),
        recursive: false,
    });
    let deep = scan.recursive_dirs.iter().map(|dir| ScanRoot {
        dir: dir.clone(),
        recursive: true,
    });
    shallow.chain(deep).collect()
}

/// Every source file under the configured directories, in discovery order.
///
/// A file reached through more than one root is listed once, at its first
/// position.
///
/// # Errors
///
/// Fails if a directory cannot be read, or if no source file is found.
pub fn discover_sources(scan: &ScanConfig) -> Result<Vec<PathBuf>> {
    let roots = scan_roots(scan);
    let mut found = IndexSet::new();

    for root in &roots {
        let before = found.len();
        for path in walk(root, scan)? {
            if !found.insert(path.clone()) {
                trace!(path = %path.display(), "already discovered");
            }
        }
        debug!(
            dir = %root.dir.display(),
            recursive = root.recursive,
            files = found.len() - before,
            "scanned directory"
        );
    }

    if found.is_empty() {
        return Err(DiscoveryError::NoSources {
            searched: roots.into_iter().map(|root| root.dir).collect(),
        }
        .into());
    }
    Ok(found.into_iter().collect())
}

fn walk(root: &ScanRoot, scan: &ScanConfig) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut walker = WalkDir::new(&root.dir)
        .min_depth(1)
        .follow_links(scan.follow_links)
        .sort_by_file_name();
    if !root.recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| unreadable(&root.dir, err))?;
        if entry.file_type().is_file() && scan.matches_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn unreadable(root: &Path, err: walkdir::Error) -> DiscoveryError {
    let path = err.path().unwrap_or(root).to_path_buf();
    DiscoveryError::Unreadable {
        path,
        source: err.into(),
    }
}
