//! Configuration document discovery.
//!
//! The document lives next to the installation rather than the project:
//! for an executable at `<prefix>/bin/projectwiz` the catalog is read from
//! `<prefix>/config.json`.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name of the catalog document.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Catalog path for an executable at `exe`.
///
/// Uses the parent of the executable's directory. An executable with no
/// grandparent (e.g. `/projectwiz`) falls back to its own directory.
pub fn config_path_for_exe(exe: &Path) -> PathBuf {
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    let base = exe_dir.parent().unwrap_or(exe_dir);
    base.join(CONFIG_FILE_NAME)
}

/// Resolve the catalog path, preferring an explicit override.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let exe = std::env::current_exe()?;
    let path = config_path_for_exe(&exe);
    tracing::debug!("Executable at {}, catalog at {}", exe.display(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_in_grandparent_directory() {
        let path = config_path_for_exe(Path::new("/opt/projectwiz/bin/projectwiz"));
        assert_eq!(path, PathBuf::from("/opt/projectwiz/config.json"));
    }

    #[test]
    fn shallow_executable_uses_its_own_directory() {
        let path = config_path_for_exe(Path::new("/projectwiz"));
        assert_eq!(path, PathBuf::from("/config.json"));
    }

    #[test]
    fn explicit_path_wins() {
        let explicit = PathBuf::from("/tmp/catalog.json");
        let resolved = resolve_config_path(Some(&explicit)).unwrap();
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn default_path_ends_with_file_name() {
        let resolved = resolve_config_path(None).unwrap();
        assert!(resolved.ends_with(CONFIG_FILE_NAME));
    }
}
