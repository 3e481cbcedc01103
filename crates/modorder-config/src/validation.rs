//! Schema checks applied after all layers are merged.

use crate::config::ModorderConfig;
use crate::error::{ConfigError, Result};

/// Reject values no run could succeed with.
pub fn validate(config: &ModorderConfig) -> Result<()> {
    let scan = &config.scan;
    if scan.extensions.is_empty() {
        return Err(ConfigError::invalid(
            "scan.extensions",
            "at least one source extension is required",
        ));
    }
    if scan
        .extensions
        .iter()
        .any(|ext| ext.trim().trim_start_matches('.').is_empty())
    {
        return Err(ConfigError::invalid(
            "scan.extensions",
            "extensions cannot be empty strings",
        ));
    }
    if scan
        .dirs
        .iter()
        .chain(&scan.recursive_dirs)
        .any(|dir| dir.as_os_str().is_empty())
    {
        return Err(ConfigError::invalid(
            "scan.dirs",
            "directory entries cannot be empty",
        ));
    }

    let limits = &config.limits;
    for (field, value) in [
        ("limits.max_files", limits.max_files),
        ("limits.max_uses_per_file", limits.max_uses_per_file),
        ("limits.max_edges_per_node", limits.max_edges_per_node),
    ] {
        if value == 0 {
            return Err(ConfigError::invalid(field, "must be greater than zero"));
        }
    }

    Ok(())
}
