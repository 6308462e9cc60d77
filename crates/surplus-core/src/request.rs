//! Food request domain model.
//!
//! Consumers and NGOs request a listed donation; donors accept.

use crate::error::{Result, SurplusError};
use crate::wire;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RequestRepr")]
pub struct FoodRequest {
    pub id: String,
    pub status: RequestStatus,
    pub donation_id: String,
    pub ngo_id: Option<String>,
    pub quantity_requested: Option<u32>,
    pub purpose: Option<String>,
    pub created_at: Option<String>,
}

// `POST /requests` wraps the created row as `{request: {...}}`; listings
// carry bare rows.
#[derive(Deserialize)]
#[serde(untagged)]
enum RequestRepr {
    Wrapped { request: RequestRow },
    Bare(RequestRow),
}

#[derive(Deserialize)]
struct RequestRow {
    #[serde(alias = "request_id", deserialize_with = "wire::id_string")]
    id: String,
    status: RequestStatus,
    #[serde(deserialize_with = "wire::id_string")]
    donation_id: String,
    #[serde(
        default,
        alias = "requester_id",
        deserialize_with = "wire::option_id_string"
    )]
    ngo_id: Option<String>,
    #[serde(default)]
    quantity_requested: Option<u32>,
    #[serde(default)]
    purpose: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<RequestRepr> for FoodRequest {
    fn from(repr: RequestRepr) -> Self {
        let row = match repr {
            RequestRepr::Wrapped { request } | RequestRepr::Bare(request) => request,
        };
        FoodRequest {
            id: row.id,
            status: row.status,
            donation_id: row.donation_id,
            ngo_id: row.ngo_id,
            quantity_requested: row.quantity_requested,
            purpose: row.purpose,
            created_at: row.created_at,
        }
    }
}

/// Body of `POST /requests`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFoodRequest {
    pub donation_id: String,
    pub quantity_requested: u32,
    pub purpose: String,
}

impl NewFoodRequest {
    pub fn validate(&self) -> Result<()> {
        if self.donation_id.trim().is_empty() {
            return Err(SurplusError::validation("donation_id", "donation_id is required"));
        }
        if self.quantity_requested == 0 {
            return Err(SurplusError::validation(
                "quantity_requested",
                "Quantity must be a positive number",
            ));
        }
        Ok(())
    }
}

/// Query filters for `GET /requests/pending`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
    pub page: u32,
    pub limit: u32,
}

impl Default for RequestFilters {
    fn default() -> Self {
        Self {
            status: None,
            page: 1,
            limit: 10,
        }
    }
}
