//! Error handling for the modorder CLI.
//!
//! `CliError` is the top-level error every command returns. Library errors
//! (`GraphError`, `ConfigError`) and discovery failures convert into it via
//! `#[from]`, and `main` turns it into a `miette::Report` for display.
//!
//! # Example
//!
//! ```rust,no_run
//! use modorder_cli::error::{Result, ResultExt};
//!
//! fn working_dir() -> Result<std::path::PathBuf> {
//!     std::env::current_dir().context("Cannot determine the working directory")
//! }
//! ```

mod miette;

use std::path::PathBuf;

use modorder_config::ConfigError;
use modorder_graph::GraphError;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scanning or ordering failed
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Source directories could not be enumerated
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error wrapped with what was being attempted
    #[error("{0}")]
    Custom(String),
}

/// Source enumeration errors.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Nothing with a source extension was found
    #[error("No Fortran source files found in {}\n\nHint: Pass directories with -d (one level) or -D (recursive)", display_dirs(.searched))]
    NoSources {
        /// Directories that were searched
        searched: Vec<PathBuf>,
    },

    /// A directory (or an entry inside it) could not be read
    #[error("Cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn display_dirs(dirs: &[PathBuf]) -> String {
    dirs.iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
