//! Explicit session context shared by use cases.

use super::model::Session;
use super::store::SessionStore;
use crate::error::{Result, SurplusError};
use std::sync::Arc;

const LOGIN_REQUIRED: &str = "Please log in to continue";

/// Handle over the session store, passed to every component that needs
/// identity instead of reading global state.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the stored session, if any.
    pub fn current(&self) -> Result<Option<Session>> {
        self.store.load()
    }

    /// Returns the stored session or an `Unauthorized` error.
    pub fn require(&self) -> Result<Session> {
        self.current()?
            .ok_or_else(|| SurplusError::unauthorized(LOGIN_REQUIRED))
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.current(), Ok(Some(_)))
    }

    /// Persists a freshly issued session.
    pub fn begin(&self, session: Session) -> Result<()> {
        tracing::info!(
            "[Session] Started session for user {} ({})",
            session.user_id,
            session.role
        );
        self.store.save(&session)
    }

    /// Destroys the stored session.
    pub fn end(&self) -> Result<()> {
        tracing::info!("[Session] Session cleared");
        self.store.clear()
    }

    /// Passes a result through, clearing the session when the server
    /// rejected the token.
    pub fn guard<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            if err.is_unauthorized() {
                tracing::warn!("[Session] Token rejected by server, clearing session");
                if let Err(clear_err) = self.store.clear() {
                    tracing::error!("[Session] Failed to clear session: {}", clear_err);
                }
            }
        }
        result
    }
}
