//! modorder CLI - Fortran module build order.
//!
//! Scans Fortran sources for `module` and `use` declarations through
//! `modorder-graph` and prints the order the files must be compiled in.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - the order command
//! - [`discovery`] - directory walking
//! - [`render`] - order / make / json output
//! - [`error`] - error types with actionable messages
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - colored status messages on stderr

pub mod cli;
pub mod commands;
pub mod discovery;
pub mod error;
pub mod logger;
pub mod render;
pub mod ui;

pub use error::{CliError, DiscoveryError, Result, ResultExt};
