//! Configuration structures.

use std::fmt;
use std::path::{Path, PathBuf};

use modorder_graph::Limits;
use modorder_graph::limits::{
    DEFAULT_MAX_EDGES_PER_NODE, DEFAULT_MAX_FILES, DEFAULT_MAX_USES_PER_FILE,
};
use serde::{Deserialize, Serialize};

/// Directory scanned when nothing else names one.
pub const DEFAULT_SOURCE_DIR: &str = "src";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModorderConfig {
    pub scan: ScanConfig,
    pub output: OutputConfig,
    pub limits: LimitsConfig,
}

/// Which directories to scan and which files count as sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Scanned one level deep, in order, before `recursive_dirs`.
    pub dirs: Vec<PathBuf>,
    /// Scanned with all subdirectories.
    pub recursive_dirs: Vec<PathBuf>,
    /// File extensions, without the dot, compared case-insensitively.
    pub extensions: Vec<String>,
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            dirs: Vec::new(),
            recursive_dirs: Vec::new(),
            extensions: vec!["f90".to_string(), "for".to_string()],
            follow_links: true,
        }
    }
}

impl ScanConfig {
    pub fn has_dirs(&self) -> bool {
        !self.dirs.is_empty() || !self.recursive_dirs.is_empty()
    }

    /// Whether the file name of `path` ends in `.<ext>` for one of the
    /// configured extensions.
    ///
    /// This is a suffix match on the whole name, so a file called just
    /// `.f90` counts as a source.
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.as_encoded_bytes();
        self.extensions.iter().any(|wanted| {
            let ext = wanted.trim_start_matches('.').as_bytes();
            name.len() > ext.len()
                && name[name.len() - ext.len() - 1] == b'.'
                && name[name.len() - ext.len()..].eq_ignore_ascii_case(ext)
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How the build order is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One path per line.
    #[default]
    Order,
    /// `path: dep1 dep2` per line.
    Make,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Order => "order",
            Self::Make => "make",
            Self::Json => "json",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_files: usize,
    pub max_uses_per_file: usize,
    pub max_edges_per_node: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            max_uses_per_file: DEFAULT_MAX_USES_PER_FILE,
            max_edges_per_node: DEFAULT_MAX_EDGES_PER_NODE,
        }
    }
}

impl From<LimitsConfig> for Limits {
    fn from(config: LimitsConfig) -> Self {
        Limits {
            max_files: config.max_files,
            max_uses_per_file: config.max_uses_per_file,
            max_edges_per_node: config.max_edges_per_node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_ignores_case_and_leading_dot() {
        let scan = ScanConfig {
            extensions: vec![".F90".into(), "for".into()],
            ..ScanConfig::default()
        };
        assert!(scan.matches_extension(Path::new("src/a.f90")));
        assert!(scan.matches_extension(Path::new("src/B.FOR")));
        assert!(!scan.matches_extension(Path::new("src/c.f")));
        assert!(!scan.matches_extension(Path::new("src/f90")));
        assert!(!scan.matches_extension(Path::new("src/af90")));
        assert!(scan.matches_extension(Path::new("src/.f90")));
        assert!(scan.matches_extension(Path::new("src/a.b.F90")));
    }

    #[test]
    fn limits_convert_field_for_field() {
        let limits: Limits = LimitsConfig {
            max_files: 3,
            max_uses_per_file: 4,
            max_edges_per_node: 5,
        }
        .into();
        assert_eq!(limits.max_files, 3);
        assert_eq!(limits.max_uses_per_file, 4);
        assert_eq!(limits.max_edges_per_node, 5);
        assert_eq!(Limits::from(LimitsConfig::default()), Limits::default());
    }

    #[test]
    fn output_format_uses_lowercase_names() {
        let parsed: OutputConfig = toml::from_str("format = \"make\"").unwrap();
        assert_eq!(parsed.format, OutputFormat::Make);
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
