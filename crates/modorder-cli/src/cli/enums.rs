use clap::ValueEnum;
use modorder_config::OutputFormat;

/// Output format for the build order
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Format {
    /// One path per line, in build order
    #[value(name = "order")]
    Order,

    /// Makefile dependency list: `path: dep1 dep2`
    #[value(name = "make")]
    Make,

    /// JSON array of `{ path, module, depends_on }`
    #[value(name = "json")]
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Order => OutputFormat::Order,
            Format::Make => OutputFormat::Make,
            Format::Json => OutputFormat::Json,
        }
    }
}
