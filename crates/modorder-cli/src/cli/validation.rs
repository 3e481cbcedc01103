use std::path::PathBuf;

/// Directories from one comma-separated flag value.
///
/// A newtype so clap treats the whole list as a single occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirList(pub Vec<PathBuf>);

impl DirList {
    pub fn to_vec(&self) -> Vec<PathBuf> {
        self.0.clone()
    }
}

/// Parse a comma-separated directory list.
///
/// Entries are trimmed and empty entries dropped, so `"src, lib,"` is
/// `["src", "lib"]`.
///
/// # Errors
///
/// Returns an error message if no directory is left.
pub fn parse_dir_list(s: &str) -> Result<DirList, String> {
    let dirs: Vec<PathBuf> = s
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect();

    if dirs.is_empty() {
        return Err("requires at least one directory".to_string());
    }
    Ok(DirList(dirs))
}
