//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "formguard";
const APPLICATION: &str = "formguard";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/formguard` or `~/.cache/formguard`
/// - macOS: `~/Library/Caches/dev.formguard.formguard`
/// - Windows: `C:\Users\<User>\AppData\Local\formguard\formguard\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/formguard` or `~/.config/formguard`
/// - macOS: `~/Library/Application Support/dev.formguard.formguard`
/// - Windows: `C:\Users\<User>\AppData\Roaming\formguard\formguard\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the default config file, if it exists.
pub fn default_config() -> Option<PathBuf> {
    config_dir()
        .map(|dir| dir.join("config.toml"))
        .filter(|path| path.is_file())
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 10;

/// Rotate logs: rename latest.log to timestamped name, clean up old logs.
///
/// Call this at startup before creating the new log file. The logger is not
/// up yet, so failures are returned for the caller to log once it is.
pub fn rotate_logs() -> Vec<String> {
    let Some(cache) = cache_dir() else {
        return Vec::new();
    };
    if let Err(e) = fs::create_dir_all(&cache) {
        return vec![format!("failed to create {}: {e}", cache.display())];
    }
    let latest = cache.join("latest.log");

    let mut failures = Vec::new();
    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = cache.join(format!("{}.log", timestamp));
        if let Err(e) = fs::rename(&latest, &archived) {
            failures.push(format!("failed to archive {}: {e}", latest.display()));
        }
    }

    failures.extend(cleanup_old_logs(&cache));
    failures
}

/// Remove old log files, keeping only the most recent MAX_OLD_LOGS.
fn cleanup_old_logs(cache_dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(cache_dir) else {
        return Vec::new();
    };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != "latest.log"
        })
        .collect();

    // Oldest first
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    let excess = logs.len().saturating_sub(MAX_OLD_LOGS);
    logs.iter()
        .take(excess)
        .filter_map(|entry| {
            fs::remove_file(entry.path())
                .err()
                .map(|e| format!("failed to remove {}: {e}", entry.path().display()))
        })
        .collect()
}
