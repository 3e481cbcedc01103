//! Rendering a build plan for stdout.

use std::fmt::Write as _;
use std::path::Path;

use modorder_config::OutputFormat;
use modorder_graph::BuildPlan;
use serde::Serialize;

use crate::error::Result;

/// Render `plan` in `format`. The result ends with a newline unless empty.
pub fn render(plan: &BuildPlan<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Order => Ok(render_order(plan)),
        OutputFormat::Make => Ok(render_make(plan)),
        OutputFormat::Json => render_json(plan),
    }
}

/// One path per line.
pub fn render_order(plan: &BuildPlan<'_>) -> String {
    let mut out = String::new();
    for path in plan.paths() {
        let _ = writeln!(out, "{}", path.display());
    }
    out
}

/// `path: dep1 dep2` per line, in build order.
pub fn render_make(plan: &BuildPlan<'_>) -> String {
    let mut out = String::new();
    for entry in plan.entries() {
        let _ = write!(out, "{}:", entry.file.path.display());
        for dep in &entry.dependencies {
            let _ = write!(out, " {}", dep.path.display());
        }
        out.push('\n');
    }
    out
}

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    path: &'a Path,
    module: Option<&'a str>,
    depends_on: Vec<&'a Path>,
}

/// Pretty-printed array of `{ path, module, depends_on }`.
pub fn render_json(plan: &BuildPlan<'_>) -> Result<String> {
    let entries: Vec<JsonEntry<'_>> = plan
        .entries()
        .map(|entry| JsonEntry {
            path: &entry.file.path,
            module: entry.file.defined_module.as_deref(),
            depends_on: entry.dependencies.iter().map(|dep| dep.path()).collect(),
        })
        .collect();

    let mut out = serde_json::to_string_pretty(&entries)?;
    out.push('\n');
    Ok(out)
}
