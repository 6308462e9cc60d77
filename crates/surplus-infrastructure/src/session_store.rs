//! `SessionStore` implementations.

use crate::paths::SurplusPaths;
use crate::storage::AtomicTomlFile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;
use surplus_core::session::{Role, Session, SessionStore};
use surplus_core::{Result, SurplusError};

/// On-disk record. Every key is optional so a partially written or
/// hand-edited file reads as "no session" instead of an error.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(rename = "userRole", skip_serializing_if = "Option::is_none")]
    user_role: Option<String>,
}

impl StoredSession {
    fn into_session(self) -> Option<Session> {
        let token = self.token.filter(|t| !t.is_empty())?;
        let user_id = self.user_id.filter(|id| !id.is_empty())?;
        let role: Role = self.user_role?.parse().ok()?;
        Some(Session::new(token, user_id, role))
    }
}

impl From<&Session> for StoredSession {
    fn from(session: &Session) -> Self {
        Self {
            token: Some(session.token.clone()),
            user_id: Some(session.user_id.clone()),
            user_role: Some(session.role.to_string()),
        }
    }
}

/// Session persisted as `session.toml`, readable only by the owner.
pub struct FileSessionStore {
    file: AtomicTomlFile<StoredSession>,
}

impl FileSessionStore {
    /// Store at the default location under the user config directory.
    pub fn new() -> Result<Self> {
        let paths = SurplusPaths::from_platform()?;
        Ok(Self::with_path(paths.session_file()))
    }

    /// Store at a specific file, used by tests and by `session_file` in config.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path).with_mode(0o600),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>> {
        let stored = self.file.load()?;
        let session = stored.and_then(StoredSession::into_session);
        if session.is_none() {
            tracing::debug!("[Session] no usable session at {}", self.file.path().display());
        }
        Ok(session)
    }

    fn save(&self, session: &Session) -> Result<()> {
        self.file.save(&StoredSession::from(session))?;
        tracing::debug!("[Session] saved to {}", self.file.path().display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.file.remove()?;
        tracing::debug!("[Session] cleared {}", self.file.path().display());
        Ok(())
    }
}

/// Process-local session, for tests and one-shot commands.
#[derive(Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

fn poisoned<T>(_: T) -> SurplusError {
    SurplusError::internal("session lock poisoned")
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>> {
        Ok(self.session.read().map_err(poisoned)?.clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.session.write().map_err(poisoned)? = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.session.write().map_err(poisoned)? = None;
        Ok(())
    }
}
