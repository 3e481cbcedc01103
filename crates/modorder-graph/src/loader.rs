//! Source text loading.
//!
//! The graph crate never walks directories; it only needs the text of files
//! it has already been handed. [`SourceLoader`] is the seam between the two:
//! [`FsLoader`] reads from disk, [`MemoryLoader`] serves text from a map and
//! is what the tests use.

use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap as HashMap;

/// Reads the text of one source file.
pub trait SourceLoader: std::fmt::Debug {
    /// Load the full text of `path`.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected;
    /// Fortran sources are ASCII in practice and the scanner only looks at
    /// keywords.
    fn load(&self, path: &Path) -> io::Result<String>;
}

/// Loads sources from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    }
}

/// Serves sources from memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: HashMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, source: impl Into<String>) {
        self.files.insert(path.into(), source.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_file(mut self, path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        self.insert(path, source);
        self
    }
}

impl SourceLoader for MemoryLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory source for {}", path.display()),
            )
        })
    }
}
