//! Input-size ceilings.
//!
//! Every growable container in the pipeline (the file list, each file's
//! reference list, each node's edge list) grows geometrically through `Vec`
//! but is capped by a hard ceiling. Crossing a ceiling is fatal for the run:
//! the caller gets a [`LimitExceeded`] instead of a silently truncated result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default maximum number of source files in one run.
pub const DEFAULT_MAX_FILES: usize = 100_000;

/// Default maximum number of distinct module references per file.
pub const DEFAULT_MAX_USES_PER_FILE: usize = 10_000;

/// Default maximum number of out-edges per graph node.
pub const DEFAULT_MAX_EDGES_PER_NODE: usize = 100_000;

/// Which ceiling was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitKind {
    Files,
    UsesPerFile,
    EdgesPerNode,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LimitKind::Files => "source file",
            LimitKind::UsesPerFile => "module references per file",
            LimitKind::EdgesPerNode => "dependents per file",
        };
        f.write_str(name)
    }
}

/// A ceiling was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} limit of {max} exceeded")]
pub struct LimitExceeded {
    pub kind: LimitKind,
    pub max: usize,
}

/// Hard ceilings applied while scanning and building the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_files: usize,
    pub max_uses_per_file: usize,
    pub max_edges_per_node: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            max_uses_per_file: DEFAULT_MAX_USES_PER_FILE,
            max_edges_per_node: DEFAULT_MAX_EDGES_PER_NODE,
        }
    }
}

impl Limits {
    /// Ceiling configured for `kind`.
    pub fn max(&self, kind: LimitKind) -> usize {
        match kind {
            LimitKind::Files => self.max_files,
            LimitKind::UsesPerFile => self.max_uses_per_file,
            LimitKind::EdgesPerNode => self.max_edges_per_node,
        }
    }

    /// Check that a container may grow to `len` elements.
    pub fn ensure(&self, kind: LimitKind, len: usize) -> Result<(), LimitExceeded> {
        let max = self.max(kind);
        if len > max {
            return Err(LimitExceeded { kind, max });
        }
        Ok(())
    }
}
