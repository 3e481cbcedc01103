//! Miette diagnostic conversion for CLI errors.

use ::miette::Report;
use modorder_graph::GraphError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Graph(e) => graph_error_to_miette(e),
        CliError::Config(e) => ::miette::miette!("Configuration error: {}", e),
        _ => ::miette::miette!("{}", err),
    }
}

/// Convert GraphError to miette Report
pub fn graph_error_to_miette(err: GraphError) -> Report {
    match err {
        GraphError::CyclicDependency { unsorted } => {
            let files: Vec<String> = unsorted
                .iter()
                .map(|path| format!("  {}", path.display()))
                .collect();
            ::miette::miette!(
                "cyclic dependency detected, no valid build order\n\nFiles that could not be ordered:\n{}\n\nHint: Break the cycle of `use` statements between these modules",
                files.join("\n")
            )
        }
        GraphError::LimitExceeded { .. } => {
            ::miette::miette!(
                "{}\n\nHint: Raise the limit in the [limits] section of modorder.toml",
                err
            )
        }
        _ => ::miette::miette!("{}", err),
    }
}
