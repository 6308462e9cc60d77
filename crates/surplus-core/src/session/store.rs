//! Session store trait.
//!
//! Defines the interface for persisting the authenticated identity.

use super::model::Session;
use crate::error::Result;

/// Persistence backend for the current session.
///
/// Reads are synchronous: views read the session when they mount.
/// Writes happen only at login, registration and logout, which are
/// serialized by user action.
pub trait SessionStore: Send + Sync {
    /// Loads the persisted session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))`: A complete session is stored
    /// - `Ok(None)`: Nothing is stored, or the stored record is incomplete
    /// - `Err(_)`: The backend could not be read
    fn load(&self) -> Result<Option<Session>>;

    /// Replaces the persisted session.
    fn save(&self, session: &Session) -> Result<()>;

    /// Removes the persisted session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}
