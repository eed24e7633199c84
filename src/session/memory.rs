//! In-process session store

use std::sync::Mutex;

use super::{Session, SessionStore};
use crate::error::{Result, SessionError};

/// Session store held in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            session: Mutex::new(Some(Session::new(token))),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<Session>>> {
        self.session
            .lock()
            .map_err(|e| SessionError::Read(e.to_string()).into())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<Session>> {
        let mut guard = self.lock()?;
        if guard.as_ref().is_some_and(Session::is_expired) {
            *guard = None;
        }
        Ok(guard.clone())
    }

    fn set(&self, session: Session) -> Result<()> {
        *self.lock()? = Some(session);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}
