//! Session domain module.
//!
//! Holds the authenticated identity (bearer token, user id and role), the
//! storage interface that persists it, and the explicit context object
//! handed to every use case that needs identity.
//!
//! # Module Structure
//!
//! - `model`: `Session` and `Role`
//! - `store`: `SessionStore` persistence trait
//! - `context`: `SessionContext`, the shared handle over a store

mod context;
mod model;
mod store;

pub use context::SessionContext;
pub use model::{Role, Session};
pub use store::SessionStore;
