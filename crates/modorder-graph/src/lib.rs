//! # modorder-graph
//!
//! Module dependency discovery and build ordering for Fortran sources.
//!
//! ## Overview
//!
//! A Fortran file can only be compiled once the `.mod` files of every module
//! it `use`s exist, so source files must be handed to the compiler in
//! dependency order. This crate works that order out from the source text
//! alone:
//!
//! - **Scanner**: a line-oriented pass that finds `module NAME` and
//!   `use NAME` declarations. No parsing beyond the leading keyword.
//! - **Registry**: lowercase module name → defining file.
//! - **Graph**: edges from each defining file to every file that uses it.
//! - **Sequencer**: Kahn's algorithm with a FIFO ready queue, so the order is
//!   deterministic for a fixed discovery order. Cycles fail the whole run.
//!
//! ## Architecture
//!
//! ```text
//!   paths (discovery order)
//!          │
//!          ▼
//!   ┌──────────────┐   text    ┌──────────┐
//!   │ SourceLoader │ ────────▶ │ scanner  │
//!   └──────────────┘           └────┬─────┘
//!                                   │ definitions / references
//!                   ┌───────────────┴──────────────┐
//!                   ▼                              ▼
//!          ┌────────────────┐  lookup   ┌─────────────────┐
//!          │ ModuleRegistry │ ────────▶ │ DependencyGraph │
//!          └────────────────┘           └────────┬────────┘
//!                                                ▼
//!                                        ┌──────────────┐
//!                                        │  sequence()  │ ─▶ BuildPlan
//!                                        └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use modorder_graph::{Limits, Project};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let project = Project::from_sources(
//!     [
//!         ("c.f90", "module c\n  use a\n  use b, only: helper\nend module c\n"),
//!         ("b.f90", "module b\n  use a\nend module b\n"),
//!         ("a.f90", "module a\nend module a\n"),
//!     ],
//!     &Limits::default(),
//! )?;
//!
//! let plan = project.plan()?;
//! let order: Vec<_> = plan.paths().map(|p| p.display().to_string()).collect();
//! assert_eq!(order, ["a.f90", "b.f90", "c.f90"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## What is deliberately not handled
//!
//! Submodules, `include` lines, preprocessor directives and declarations
//! split across continuation lines are ignored. A `use` of a module that no
//! scanned file defines (`mpi`, `iso_fortran_env`, ...) is treated as
//! prebuilt and produces no edge.

pub mod external_dep;
pub mod graph;
pub mod limits;
pub mod loader;
pub mod project;
pub mod registry;
pub mod scanner;
pub mod sequence;
pub mod source_file;
pub mod statistics;

use std::path::PathBuf;

pub use external_dep::ExternalReference;
pub use graph::{DependencyGraph, UnresolvedReference};
pub use limits::{LimitExceeded, LimitKind, Limits};
pub use loader::{FsLoader, MemoryLoader, SourceLoader};
pub use project::{BuildPlan, DuplicateDefinition, PlanEntry, Project};
pub use registry::ModuleRegistry;
pub use scanner::{Declaration, Declarations, classify_line, scan};
pub use sequence::{CycleDetected, sequence};
pub use source_file::{FileId, SourceFile};
pub use statistics::GraphStatistics;

/// Error types for graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A source file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configured input-size ceiling was crossed.
    #[error("input size limit exceeded{}: {source}", in_path(.path))]
    LimitExceeded {
        path: Option<PathBuf>,
        #[source]
        source: LimitExceeded,
    },

    /// No build order exists.
    #[error("cyclic dependency detected, no valid build order ({} file(s) involved)", .unsorted.len())]
    CyclicDependency {
        /// Files that could not be placed, in discovery order.
        unsorted: Vec<PathBuf>,
    },
}

fn in_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests;
