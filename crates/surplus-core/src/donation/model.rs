//! Server-owned donation projections.
//!
//! The client holds these read-only; status only changes through the
//! matching API action.

use crate::wire;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DonationStatus {
    Available,
    Reserved,
    Claimed,
}

/// A listed donation as returned by `/donations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    #[serde(alias = "donation_id", deserialize_with = "wire::id_string")]
    pub id: String,
    pub food_item: String,
    #[serde(default, deserialize_with = "wire::option_f64")]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub status: DonationStatus,
    #[serde(default, deserialize_with = "wire::option_id_string")]
    pub donor_id: Option<String>,
    #[serde(default)]
    pub donation_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Query filters for `GET /donations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonationFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DonationStatus>,
    pub page: u32,
    pub limit: u32,
}

impl Default for DonationFilters {
    fn default() -> Self {
        Self {
            status: None,
            page: 1,
            limit: 10,
        }
    }
}
