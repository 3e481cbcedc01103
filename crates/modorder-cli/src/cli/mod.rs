//! Command-line interface definition for modorder.
//!
//! A single command: scan the given directories, then print the build order
//! (or a Makefile dependency manifest, or JSON) to stdout.

pub mod enums;
mod tests;
mod validation;

use std::path::PathBuf;

use clap::Parser;
use modorder_config::{ConfigOverrides, OutputFormat, OutputOverrides, ScanOverrides};

pub use enums::*;
pub use validation::{DirList, parse_dir_list};

/// modorder - Fortran module build order
#[derive(Parser, Debug)]
#[command(
    name = "modorder",
    version,
    about = "Print the order Fortran sources must be compiled in",
    long_about = "Scans Fortran sources for `module` and `use` declarations and prints the files\n\
                  in an order where every module is compiled before the files that use it.\n\n\
                  If neither -d nor -D is given (here or in modorder.toml), 'src' is scanned\n\
                  non-recursively."
)]
pub struct Cli {
    /// Comma-separated directories to scan non-recursively
    ///
    /// May be given once. Scanned before any -D directory.
    #[arg(short = 'd', long = "dirs", value_name = "DIRS", value_parser = parse_dir_list)]
    pub dirs: Option<DirList>,

    /// Comma-separated directories to scan recursively
    ///
    /// May be given once.
    #[arg(short = 'D', long = "recursive-dirs", value_name = "DIRS", value_parser = parse_dir_list)]
    pub recursive_dirs: Option<DirList>,

    /// Print a Makefile dependency list instead of the build order
    ///
    /// Same as `--format make`.
    #[arg(short = 'm', long = "make", conflicts_with = "format")]
    pub make: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Config file to use instead of ./modorder.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Format requested on the command line, if any.
    pub fn output_format(&self) -> Option<OutputFormat> {
        if self.make {
            Some(OutputFormat::Make)
        } else {
            self.format.map(Into::into)
        }
    }

    /// Config layer built from the flags.
    ///
    /// Naming directories with either `-d` or `-D` replaces both directory
    /// lists from lower layers, so the flags alone decide what is scanned.
    pub fn overrides(&self) -> ConfigOverrides {
        let dirs_given = self.dirs.is_some() || self.recursive_dirs.is_some();
        let list = |dirs: &Option<DirList>| {
            dirs_given.then(|| dirs.as_ref().map(DirList::to_vec).unwrap_or_default())
        };

        ConfigOverrides {
            scan: ScanOverrides {
                dirs: list(&self.dirs),
                recursive_dirs: list(&self.recursive_dirs),
            },
            output: OutputOverrides {
                format: self.output_format(),
            },
        }
    }
}
