//! Session file: the CLI's stand-in for browser `localStorage`.
//!
//! DESIGN
//! ======
//! The file is a flat JSON object of string keys, read and rewritten on every
//! operation so separate invocations always see the latest pair. When the last
//! key is removed the file is deleted. Storage I/O failures are logged and
//! treated as an empty store; the next login rewrites the file.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use api::KeyValueStorage;

pub const DEFAULT_SESSION_FILE: &str = ".market-session.json";

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), guard: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file unreadable");
                return BTreeMap::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "session file is not a JSON object");
            BTreeMap::new()
        })
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> io::Result<()> {
        if entries.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            };
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let rendered = serde_json::to_string_pretty(entries).map_err(io::Error::other)?;
        fs::write(&self.path, rendered)?;
        restrict_permissions(&self.path)
    }

    fn update(&self, apply: impl FnOnce(&mut BTreeMap<String, String>)) {
        let _lock = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read();
        apply(&mut entries);
        if let Err(e) = self.write(&entries) {
            tracing::warn!(path = %self.path.display(), error = %e, "session file not saved");
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let _lock = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        self.read().remove(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        self.update(|entries| {
            entries.insert(key.to_owned(), value.to_owned());
        });
    }

    fn remove_item(&self, key: &str) {
        self.update(|entries| {
            entries.remove(key);
        });
    }
}
