//! Session slot backends
//!
//! A slot is one named entry of per-session storage holding a single
//! string value. [`MemorySlot`] is the per-process analogue of a browser
//! tab's session scope; [`FileSlot`] persists across processes with
//! atomic tmp-then-rename writes.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One named entry of session-scoped storage
pub trait SessionSlot: Send + Sync {
    /// Read the stored value, if any
    ///
    /// Unreadable storage reads as absent.
    fn read(&self) -> Option<String>;

    /// Overwrite the stored value
    fn write(&self, value: &str) -> Result<()>;

    /// Remove the stored value, best effort
    fn clear(&self);
}

impl SessionSlot for Box<dyn SessionSlot> {
    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn write(&self, value: &str) -> Result<()> {
        (**self).write(value)
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// In-memory slot, dropped with the process
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Mutex<Option<String>>,
}

impl MemorySlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.value.lock().ok()?.clone()
    }

    fn write(&self, value: &str) -> Result<()> {
        let mut guard = self
            .value
            .lock()
            .map_err(|_| Error::session("slot lock poisoned"))?;
        *guard = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.value.lock() {
            *guard = None;
        }
    }
}

/// File-backed slot
///
/// Writes go to a temp file first, then rename, so a crash mid-write
/// never leaves a torn entry behind.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot at the given path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create the conventional slot inside a directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", super::SLOT_NAME)))
    }

    /// The slot's backing path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionSlot for FileSlot {
    fn read(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn write(&self, value: &str) -> Result<()> {
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, value).map_err(|e| Error::Session {
            message: format!("Failed to write slot file: {e}"),
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| Error::Session {
            message: format!("Failed to rename slot file: {e}"),
        })?;

        Ok(())
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
