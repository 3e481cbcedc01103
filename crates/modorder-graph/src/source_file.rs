use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::scanner::Declarations;

/// Index of a source file in discovery order.
///
/// Discovery order is the tie-break root of the build order, so ids are
/// handed out sequentially and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileId(usize);

impl FileId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One discovered source file and what its declarations say about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub id: FileId,
    pub path: PathBuf,
    /// Lowercase name of the module this file defines (last definition line wins).
    pub defined_module: Option<String>,
    /// Lowercase referenced module names, first-seen order, no duplicates.
    pub used_modules: Vec<String>,
}

impl SourceFile {
    pub fn new(id: FileId, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            path: path.into(),
            defined_module: None,
            used_modules: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record the scanner's findings for this file.
    pub fn record(&mut self, declarations: &Declarations) {
        self.defined_module = declarations.defined_module().map(str::to_owned);
        self.used_modules = declarations.references.clone();
    }

    pub fn defines(&self, module: &str) -> bool {
        self.defined_module.as_deref() == Some(module)
    }
}
