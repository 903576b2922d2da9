use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a user-supplied path to an absolute one against the current
/// working directory. The file does not have to exist yet; a read failure
/// is reported by `read_source`.
pub fn resolve_path(raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Read a COBOL source file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}
