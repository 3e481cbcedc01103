//! Configuration for modorder.
//!
//! Settings come from four layers, lowest priority first:
//!
//! 1. built-in defaults ([`ModorderConfig::default`])
//! 2. `modorder.toml` in the project root, or a file named with `--config`
//! 3. `MODORDER_*` environment variables, `__` separating nested keys
//!    (`MODORDER_OUTPUT__FORMAT=json`, `MODORDER_SCAN__DIRS=[src,lib]`)
//! 4. command-line overrides ([`ConfigOverrides`])
//!
//! ```
//! use modorder_config::{ModorderConfig, OutputFormat};
//!
//! let config = ModorderConfig::default();
//! assert_eq!(config.output.format, OutputFormat::Order);
//! assert_eq!(config.scan.extensions, ["f90", "for"]);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod loading;
pub mod validation;

pub use config::*;
pub use discovery::{CONFIG_FILE_NAME, ConfigDiscovery};
pub use error::{ConfigError, Result};
pub use loading::{ConfigOverrides, ENV_PREFIX, OutputOverrides, ScanOverrides};
pub use validation::validate;
