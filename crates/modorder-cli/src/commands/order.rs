//! Order command implementation.

use std::io::Write as _;
use std::path::Path;

use modorder_config::ModorderConfig;
use modorder_graph::{FsLoader, Limits, Project};
use tracing::debug;

use crate::cli::Cli;
use crate::discovery::discover_sources;
use crate::error::{Result, ResultExt};
use crate::render::render;
use crate::ui;

/// Execute the command from the working directory.
pub fn execute(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Cannot determine the working directory")?;
    let output = run(cli, &cwd)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Cannot write build order")
}

/// Load configuration rooted at `root`, scan, order and render.
///
/// Relative source directories are resolved against the process working
/// directory, so `root` only decides where `modorder.toml` is looked up.
///
/// # Steps
///
/// 1. Merge defaults, `modorder.toml`, `MODORDER_*` and the flags
/// 2. Enumerate source files
/// 3. Scan them and build the dependency graph
/// 4. Order the files, or fail on a cycle
/// 5. Render in the requested format
pub fn run(cli: &Cli, root: &Path) -> Result<String> {
    let config = ModorderConfig::load(root, cli.config.as_deref(), &cli.overrides())?;
    debug!(?config, "configuration loaded");

    let paths = discover_sources(&config.scan)?;
    debug!(files = paths.len(), "discovered source files");

    let limits = Limits::from(config.limits);
    let project = Project::load(paths, &FsLoader, &limits)?;
    report(&project, cli);

    let plan = project.plan()?;
    render(&plan, config.output.format)
}

fn report(project: &Project, cli: &Cli) {
    if cli.quiet {
        return;
    }

    let externals = project.external_references();
    if cli.verbose && !externals.is_empty() {
        let names: Vec<&str> = externals.iter().map(|e| e.module.as_str()).collect();
        ui::info(&format!(
            "treating {} module(s) as prebuilt: {}",
            names.len(),
            names.join(", ")
        ));
    }

    let stats = project.statistics();
    debug!(
        files = stats.file_count,
        modules = stats.module_count,
        edges = stats.edge_count,
        external = stats.external_reference_count,
        "dependency graph built"
    );
}
