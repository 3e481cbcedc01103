//! Layered loading with figment.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::Serialize;
use tracing::debug;

use crate::config::{ModorderConfig, OutputFormat};
use crate::discovery::ConfigDiscovery;
use crate::error::Result;
use crate::validation::validate;

/// Prefix of environment variables read as config.
pub const ENV_PREFIX: &str = "MODORDER_";

/// Values given on the command line. `None` leaves lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    pub scan: ScanOverrides,
    pub output: OutputOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dirs: Option<Vec<PathBuf>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive_dirs: Option<Vec<PathBuf>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OutputOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl ModorderConfig {
    /// Defaults, config file and environment, without CLI overrides.
    pub fn figment(root: &Path, config_path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = ConfigDiscovery::new(root).resolve(config_path)? {
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load configuration.
    /// Priority: CLI overrides > environment variables > config file > defaults
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self> {
        let config: Self = Self::figment(root, config_path)?
            .merge(Serialized::defaults(overrides))
            .extract()?;
        validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_skip_unset_fields() {
        let figment = Figment::new().merge(Serialized::defaults(ConfigOverrides {
            output: OutputOverrides {
                format: Some(OutputFormat::Json),
            },
            ..ConfigOverrides::default()
        }));

        assert!(figment.find_value("scan.dirs").is_err());
        assert_eq!(
            figment.extract_inner::<String>("output.format").unwrap(),
            "json"
        );
    }
}
