//! Generic JSON persistence helpers for ~/.snake/ data files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.snake/ directory path, creating it if needed.
pub fn snake_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".snake");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// The data directory to use: `explicit` when given, `~/.snake/` otherwise.
/// Either way the directory is created if needed.
pub fn resolve_data_dir(explicit: Option<&Path>) -> io::Result<PathBuf> {
    match explicit {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            Ok(dir.to_path_buf())
        }
        None => snake_dir(),
    }
}

/// Load a JSON file.
///
/// Returns `Ok(None)` when the file does not exist, and an `InvalidData`
/// error when it exists but cannot be parsed.
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> io::Result<Option<T>> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    load_json(path).ok().flatten().unwrap_or_default()
}

/// Save a value as pretty-printed JSON, creating the parent directory.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Unique scratch directory for tests that touch the filesystem.
#[cfg(test)]
pub(crate) fn test_dir(label: &str) -> PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};
    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "snake-test-{}-{}-{}",
        label,
        std::process::id(),
        id
    ))
}
