//! Session domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Marketplace role of an account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    /// Requests listed food directly.
    Consumer,
    /// Lists surplus food.
    Donor,
    /// Manages pending requests on behalf of a group.
    Ngo,
}

impl Role {
    /// Route a client should land on after logging in with this role.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Donor => "/donor/requests",
            Role::Consumer => "/consumer/available-foods",
            Role::Ngo => "/ngo/pending-requests",
        }
    }
}

/// Authenticated identity, created on login and destroyed on logout.
///
/// The persisted form uses the fixed keys `token`, `userId` and `userRole`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential.
    pub token: String,
    /// Numeric user identifier, string-encoded.
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userRole")]
    pub role: Role,
}

impl Session {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
            role,
        }
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// The token must never reach logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trips_through_strings() {
        assert_eq!(Role::from_str("donor").unwrap(), Role::Donor);
        assert_eq!(Role::from_str("NGO").unwrap(), Role::Ngo);
        assert_eq!(Role::Consumer.to_string(), "consumer");
        assert!(Role::from_str("admin").is_err());
    }

    #[test]
    fn landing_paths_follow_role() {
        assert_eq!(Role::Donor.landing_path(), "/donor/requests");
        assert_eq!(Role::Consumer.landing_path(), "/consumer/available-foods");
        assert_eq!(Role::Ngo.landing_path(), "/ngo/pending-requests");
    }

    #[test]
    fn session_uses_fixed_storage_keys() {
        let session = Session::new("abc", "7", Role::Donor);
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["token"], "abc");
        assert_eq!(value["userId"], "7");
        assert_eq!(value["userRole"], "donor");
    }

    #[test]
    fn debug_output_redacts_token() {
        let session = Session::new("secret-token", "7", Role::Ngo);
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-token"));
        assert_eq!(session.bearer(), "Bearer secret-token");
    }
}
