//! modorder - print the compile order of Fortran sources.
//!
//! Parses arguments, sets up logging and colors, and runs the order command.

use clap::Parser;
use miette::Result;
use modorder_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    commands::order_execute(&args).map_err(error::cli_error_to_miette)
}
