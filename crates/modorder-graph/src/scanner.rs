//! Line-oriented extraction of module declarations.
//!
//! This is deliberately not a Fortran parser. Each line is trimmed and
//! classified by its leading keyword:
//!
//! - `module NAME` defines a module, unless the line mentions `procedure`
//!   anywhere (`module procedure foo` inside an interface block is not a
//!   module boundary).
//! - `use NAME` references a module. Only the token before any comma counts,
//!   so `use mpi, only: mpi_comm_world` yields `mpi`.
//!
//! Keywords match case-insensitively and names are lowercased, so
//! `Module Foo` and `use FOO` meet at the same registry key.

use indexmap::IndexSet;

use super::limits::{LimitKind, LimitExceeded, Limits};

/// Keyword that opens a module definition.
pub const DEFINITION_KEYWORD: &str = "module";

/// Substring that turns a `module` line into a procedure declaration.
pub const PROCEDURE_MARKER: &str = "procedure";

/// Keyword that opens a module reference.
pub const REFERENCE_KEYWORD: &str = "use";

/// Classification of a single trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `module NAME`
    Definition(String),
    /// `use NAME[, ...]`
    Reference(String),
}

/// Everything the scanner found in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    /// Every definition line, in file order.
    pub definitions: Vec<String>,
    /// Referenced names, first-seen order, no duplicates.
    pub references: Vec<String>,
}

impl Declarations {
    /// The module the file is considered to define: the last definition line.
    pub fn defined_module(&self) -> Option<&str> {
        self.definitions.last().map(String::as_str)
    }
}

/// Classify one line of source text.
pub fn classify_line(line: &str) -> Option<Declaration> {
    let line = line.trim();

    if starts_with_keyword(line, DEFINITION_KEYWORD) {
        if contains_ignore_ascii_case(line, PROCEDURE_MARKER) {
            return None;
        }
        return second_token(line).map(Declaration::Definition);
    }

    if starts_with_keyword(line, REFERENCE_KEYWORD) {
        return second_token(line).map(Declaration::Reference);
    }

    None
}

/// Collect the names of every module defined in `source`, in file order.
pub fn scan_definitions(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| match classify_line(line) {
            Some(Declaration::Definition(name)) => Some(name),
            _ => None,
        })
        .collect()
}

/// Collect the distinct module names referenced by `source`.
///
/// Fails once more than `limits.max_uses_per_file` distinct names are seen.
pub fn scan_references(source: &str, limits: &Limits) -> Result<Vec<String>, LimitExceeded> {
    let mut seen: IndexSet<String> = IndexSet::new();

    for line in source.lines() {
        if let Some(Declaration::Reference(name)) = classify_line(line) {
            if seen.insert(name) {
                limits.ensure(LimitKind::UsesPerFile, seen.len())?;
            }
        }
    }

    Ok(seen.into_iter().collect())
}

/// Run both extractions over `source`.
pub fn scan(source: &str, limits: &Limits) -> Result<Declarations, LimitExceeded> {
    Ok(Declarations {
        definitions: scan_definitions(source),
        references: scan_references(source, limits)?,
    })
}

/// `line` starts with `keyword` (any case) followed by whitespace.
fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    let Some(head) = line.get(..keyword.len()) else {
        return false;
    };
    head.eq_ignore_ascii_case(keyword)
        && line[keyword.len()..]
            .chars()
            .next()
            .is_some_and(char::is_whitespace)
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(needle)
}

/// Second whitespace-delimited token, cut at the first comma, lowercased.
fn second_token(line: &str) -> Option<String> {
    let rest = line
        .trim_start()
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim_start())?;

    let end = rest
        .find(|c: char| c.is_whitespace() || c == ',')
        .unwrap_or(rest.len());
    let name = &rest[..end];

    (!name.is_empty()).then(|| name.to_lowercase())
}
