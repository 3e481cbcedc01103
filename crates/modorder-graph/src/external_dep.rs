use serde::{Deserialize, Serialize};

use super::FileId;

/// A module that is used but not defined by any scanned file (e.g. `mpi`,
/// `iso_c_binding`), and the files that use it. Such modules are assumed to
/// be prebuilt and never become graph edges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExternalReference {
    pub module: String,
    pub importers: Vec<FileId>,
}

impl ExternalReference {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            importers: Vec::new(),
        }
    }

    pub fn push_importer(&mut self, file: FileId) {
        self.importers.push(file);
    }
}
