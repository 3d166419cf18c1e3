//! Common test utilities

#![allow(dead_code)]

use assert_cmd::Command;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the dispatcher binary
pub const BIN: &str = "files-cleaner-cli";

/// Fake application printing its working directory and arguments
pub const ECHO_APP: &str = "#!/bin/sh\npwd -P\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\"; done\n";

/// Create an app root containing an executable `app` with the given body
pub fn create_fake_app(body: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let app = temp_dir.path().join("app");
    fs::write(&app, body).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&app, fs::Permissions::from_mode(0o755)).unwrap();
    }

    temp_dir
}

/// Create an empty config file so the user's own config is never read
pub fn create_empty_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yml");
    fs::write(&config_path, "").unwrap();
    (temp_dir, config_path)
}

/// Create a directory holding `a.txt` and `b dir`
pub fn create_listing_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "").unwrap();
    fs::create_dir(temp_dir.path().join("b dir")).unwrap();
    temp_dir
}

/// Dispatcher command isolated from the caller's environment
pub fn dispatcher(config: &Path, app_root: &Path, cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.env("FILES_CLEANER_CONFIG", config)
        .env("FILES_CLEANER_APP_ROOT", app_root)
        .env_remove("FILES_CLEANER_LOG")
        .current_dir(cwd);
    cmd
}

/// Canonical form of a path as a string
pub fn canonical(path: &Path) -> String {
    fs::canonicalize(path).unwrap().display().to_string()
}

/// Owned words from string slices
pub fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Owned OS arguments from string slices
pub fn os_words(list: &[&str]) -> Vec<OsString> {
    list.iter().map(|s| OsString::from(*s)).collect()
}
