//! File-based config discovery.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Name of the project config file.
pub const CONFIG_FILE_NAME: &str = "modorder.toml";

/// Finds the config file for a project root.
///
/// # Example
///
/// ```no_run
/// use modorder_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// if let Some(path) = discovery.find() {
///     println!("using {}", path.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Discovery rooted at the current working directory.
    pub fn current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `modorder.toml` in the root, if it is a file.
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(CONFIG_FILE_NAME);
        path.is_file().then_some(path)
    }

    /// Resolve which config file to use.
    ///
    /// An explicit path must exist; without one, a missing
    /// `modorder.toml` just means there is no file layer.
    pub fn resolve(&self, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        match explicit {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    self.root.join(path)
                };
                if path.is_file() {
                    Ok(Some(path))
                } else {
                    Err(ConfigError::NotFound(path))
                }
            }
            None => Ok(self.find()),
        }
    }
}
