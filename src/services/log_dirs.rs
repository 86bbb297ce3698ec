//! Per-run log files under the XDG state directory.
//!
//! Each run writes `folio-{PID}.log` into `$XDG_STATE_HOME/folio/logs/`
//! (usually `~/.local/state/folio/logs/`). Files left by runs older than a
//! day are removed on startup.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

/// Minimum age for log files to be cleaned up (24 hours)
const CLEANUP_AGE: Duration = Duration::from_secs(24 * 60 * 60);

const APP_DIR: &str = "folio";
const FILE_PREFIX: &str = "folio-";

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

fn fallback_dir() -> PathBuf {
    std::env::temp_dir().join("folio-logs")
}

/// Where logs go for the given `XDG_STATE_HOME` and home directory values.
///
/// A relative `XDG_STATE_HOME` is ignored, as the XDG base directory rules
/// require.
fn resolve_log_dir(state_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    let state = state_home
        .filter(|path| path.is_absolute())
        .or_else(|| home.map(|home| home.join(".local").join("state")))?;
    Some(state.join(APP_DIR).join("logs"))
}

/// The log directory for this process, created on first use.
pub fn log_dir() -> &'static PathBuf {
    LOG_DIR.get_or_init(|| {
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from);
        let state_home = std::env::var_os("XDG_STATE_HOME").map(PathBuf::from);

        match resolve_log_dir(state_home, home) {
            Some(dir) => match fs::create_dir_all(&dir) {
                Ok(()) => dir,
                Err(e) => {
                    tracing::warn!(dir = %dir.display(), "cannot create log directory: {e}");
                    fallback_dir()
                }
            },
            None => fallback_dir(),
        }
    })
}

/// Returns `{log_dir}/folio-{PID}.log`
pub fn main_log_path() -> PathBuf {
    log_dir().join(format!("{FILE_PREFIX}{}.log", std::process::id()))
}

/// Remove log files from earlier runs that are older than a day.
pub fn cleanup_stale_logs() {
    cleanup_stale_logs_in_dir(log_dir(), std::process::id(), CLEANUP_AGE);
}

fn cleanup_stale_logs_in_dir(dir: &Path, current_pid: u32, age: Duration) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        let Some(pid) = extract_pid_from_filename(&name) else {
            continue;
        };
        if pid == current_pid {
            continue;
        }

        if entry.file_type().map(|t| t.is_file()).unwrap_or(false)
            && is_file_older_than(&entry.path(), age)
        {
            match fs::remove_file(entry.path()) {
                Ok(()) => {
                    tracing::debug!("Cleaned up stale log file: {:?}", entry.path());
                    removed += 1;
                }
                Err(e) => {
                    tracing::debug!("Failed to clean up stale log {:?}: {}", entry.path(), e);
                }
            }
        }
    }
    removed
}

fn is_file_older_than(path: &Path, age: Duration) -> bool {
    let Ok(modified) = fs::metadata(path).and_then(|m| m.modified()) else {
        return false;
    };

    SystemTime::now()
        .duration_since(modified)
        .map(|elapsed| elapsed >= age)
        .unwrap_or(false)
}

/// Extract PID from a filename like "folio-12345.log"
fn extract_pid_from_filename(name: &str) -> Option<u32> {
    let stem = name.strip_prefix(FILE_PREFIX)?.strip_suffix(".log")?;
    stem.parse().ok()
}
