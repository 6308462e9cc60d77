use crate::account::is_valid_email;
use crate::error::{Result, SurplusError};
use crate::wire;
use serde::{Deserialize, Serialize};

/// Body of `POST /referrals`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Referral {
    pub referred_email: String,
    pub referred_name: String,
    pub message: String,
}

impl Referral {
    pub fn validate(&self) -> Result<()> {
        if self.referred_email.trim().is_empty() {
            return Err(SurplusError::validation(
                "referred_email",
                "Referred email is required",
            ));
        }
        if !is_valid_email(&self.referred_email) {
            return Err(SurplusError::validation("referred_email", "Invalid email format"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralRecord {
    #[serde(alias = "referral_id", deserialize_with = "wire::id_string")]
    pub id: String,
    pub referred_email: String,
    #[serde(default)]
    pub referred_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
