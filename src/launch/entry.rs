//! Application entry point discovery

use crate::error::{LaunchError, LaunchResult};
use std::path::{Path, PathBuf};

/// Entry point names tried in order when none is configured
pub const ENTRY_POINT_NAMES: &[&str] = &["app", "app.py", "app.sh", "app.exe"];

/// Locate the entry point inside `app_root` and check it can be executed
pub fn find_entry_point(app_root: &Path, name: Option<&str>) -> LaunchResult<PathBuf> {
    let path = match name {
        Some(name) => Some(app_root.join(name)).filter(|p| p.is_file()),
        None => ENTRY_POINT_NAMES
            .iter()
            .map(|n| app_root.join(n))
            .find(|p| p.is_file()),
    }
    .ok_or_else(|| LaunchError::EntryPointNotFound(app_root.to_path_buf()))?;

    if !is_executable(&path) {
        return Err(LaunchError::NotExecutable(path));
    }

    Ok(path)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(not(unix))]
    fn make_executable(_path: &Path) {}

    #[test]
    fn test_missing_entry_point() {
        let temp_dir = TempDir::new().unwrap();
        let result = find_entry_point(temp_dir.path(), None);
        assert!(matches!(result, Err(LaunchError::EntryPointNotFound(_))));
    }

    #[test]
    fn test_discovers_first_candidate() {
        let temp_dir = TempDir::new().unwrap();
        let py = temp_dir.path().join("app.py");
        let sh = temp_dir.path().join("app.sh");
        fs::write(&py, "").unwrap();
        fs::write(&sh, "").unwrap();
        make_executable(&py);
        make_executable(&sh);

        assert_eq!(find_entry_point(temp_dir.path(), None).unwrap(), py);
    }

    #[test]
    fn test_configured_name() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join("cleaner");
        fs::write(&custom, "").unwrap();
        make_executable(&custom);

        assert_eq!(find_entry_point(temp_dir.path(), Some("cleaner")).unwrap(), custom);
        assert!(matches!(
            find_entry_point(temp_dir.path(), Some("other")),
            Err(LaunchError::EntryPointNotFound(_))
        ));
    }

    #[test]
    fn test_directory_is_not_an_entry_point() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("app")).unwrap();

        let result = find_entry_point(temp_dir.path(), None);
        assert!(matches!(result, Err(LaunchError::EntryPointNotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_not_executable() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("app"), "").unwrap();

        let result = find_entry_point(temp_dir.path(), None);
        assert!(matches!(result, Err(LaunchError::NotExecutable(_))));
    }
}
