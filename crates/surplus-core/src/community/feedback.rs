use crate::error::{Result, SurplusError};
use crate::wire;
use serde::{Deserialize, Serialize};

/// Body of `POST /feedback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub feedback_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

impl Feedback {
    pub fn validate(&self) -> Result<()> {
        if self.feedback_text.trim().is_empty() {
            return Err(SurplusError::validation(
                "feedback_text",
                "Feedback text is required",
            ));
        }
        if let Some(rating) = self.rating {
            if !(1..=5).contains(&rating) {
                return Err(SurplusError::validation(
                    "rating",
                    "Rating must be between 1 and 5",
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    #[serde(alias = "feedback_id", deserialize_with = "wire::id_string")]
    pub id: String,
    pub feedback_text: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub created_at: Option<String>,
}
