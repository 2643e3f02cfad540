//! Where the session record lives. One fixed key, one record, whole-record writes.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::record::PersistedSession;

/// The single storage key; the file store names its file after it.
pub const SESSION_STORAGE_KEY: &str = "ai-career-coach-session";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("session record could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub trait SessionStore: Send + Sync {
    /// Returns the stored record. A corrupt or unsupported record is deleted
    /// and reported as absent.
    fn load(&self) -> Result<Option<PersistedSession>, StoreError>;

    /// Overwrites the stored record.
    fn save(&self, record: &PersistedSession) -> Result<(), StoreError>;

    /// Removes the stored record, if any.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Parses a stored record; `None` means the text is not a usable record.
fn parse_record(raw: &str) -> Option<PersistedSession> {
    match serde_json::from_str::<PersistedSession>(raw) {
        Ok(record) if record.is_supported() => Some(record),
        Ok(record) => {
            warn!(
                "Saved session has unsupported version {}; discarding",
                record.version
            );
            None
        }
        Err(e) => {
            warn!("Failed to parse saved session: {e}; discarding");
            None
        }
    }
}

/// Keeps the record as a JSON file under the configured session directory.
pub struct FileSessionStore {
    dir: PathBuf,
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let path = dir.join(format!("{SESSION_STORAGE_KEY}.json"));
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<PersistedSession>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match parse_record(&raw) {
            Some(record) => {
                info!("Loaded saved session from {}", self.path.display());
                Ok(Some(record))
            }
            None => {
                self.clear()?;
                Ok(None)
            }
        }
    }

    fn save(&self, record: &PersistedSession) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_vec_pretty(record)?;

        // Write beside the target and rename so a crash never leaves half a record.
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(&json)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!("Saved session to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed saved session at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store holding the serialized record.
#[cfg(test)]
#[derive(Default)]
pub struct MemorySessionStore {
    raw: Mutex<Option<String>>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw record text, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<PersistedSession>, StoreError> {
        let mut raw = self.raw.lock().unwrap_or_else(|e| e.into_inner());
        let Some(text) = raw.as_deref() else {
            return Ok(None);
        };
        let record = parse_record(text);
        if record.is_none() {
            *raw = None;
        }
        Ok(record)
    }

    fn save(&self, record: &PersistedSession) -> Result<(), StoreError> {
        let json = serde_json::to_string(record)?;
        *self.raw.lock().unwrap_or_else(|e| e.into_inner()) = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.raw.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}
