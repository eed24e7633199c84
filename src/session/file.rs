//! File-backed session store
//!
//! Persists the session between CLI invocations as a small YAML document,
//! written with owner-only permissions like the config file.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{Session, SessionStore};
use crate::error::{Result, SessionError};

/// Session store persisted at a file path
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // Serializes read-modify-write cycles from concurrent tasks
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Default session file location (`~/.agendou/session.yaml`)
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            SessionError::Read("Could not determine home directory".to_string())
        })?;

        Ok(home.join(".agendou").join("session.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|e| SessionError::Read(e.to_string()).into())
    }

    fn read(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(None);
        }

        let session: Session = serde_yaml::from_str(&contents)
            .map_err(|e| SessionError::Read(e.to_string()))?;
        Ok(Some(session))
    }

    fn remove(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<Session>> {
        let _guard = self.guard()?;
        match self.read()? {
            Some(session) if session.is_expired() => {
                match session.expires_at() {
                    Some(at) => log::debug!("Stored session expired at {}", at),
                    None => log::debug!("Stored session has an unusable max age"),
                }
                self.remove()?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    fn set(&self, session: Session) -> Result<()> {
        let _guard = self.guard()?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(&session).map_err(|e| SessionError::Write(e.to_string()))?;
        std::fs::write(&self.path, contents)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.guard()?;
        self.remove()
    }
}
