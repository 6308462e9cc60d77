//! Browse domain model.

use crate::donation::DonationStatus;
use crate::wire;
use serde::{Deserialize, Serialize};

/// A food listing offered to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(alias = "donation_id", deserialize_with = "wire::id_string")]
    pub id: String,
    #[serde(alias = "food_item")]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wire::option_f64")]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub status: Option<DonationStatus>,
    /// Distance from the viewer in kilometres, when the source knows it.
    #[serde(default, alias = "distance", deserialize_with = "wire::option_f64")]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Maximum pickup distance in kilometres, clamped to `0..=20`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DistanceThreshold(f64);

impl DistanceThreshold {
    pub const MIN_KM: f64 = 0.0;
    pub const MAX_KM: f64 = 20.0;
    pub const DEFAULT_KM: f64 = 5.0;

    /// Clamps `km` into range. NaN maps to the default.
    pub fn new(km: f64) -> Self {
        if km.is_nan() {
            return Self::default();
        }
        Self(km.clamp(Self::MIN_KM, Self::MAX_KM))
    }

    pub fn max() -> Self {
        Self(Self::MAX_KM)
    }

    pub fn km(&self) -> f64 {
        self.0
    }

    pub fn is_max(&self) -> bool {
        self.0 >= Self::MAX_KM
    }

    /// Whether `item` falls within the threshold. Items with no known
    /// distance were already filtered by their source and are kept.
    pub fn includes(&self, item: &FoodItem) -> bool {
        item.distance_km.is_none_or(|d| d <= self.0)
    }
}

impl Default for DistanceThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT_KM)
    }
}

impl std::fmt::Display for DistanceThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} km", self.0)
    }
}

/// Query filters for `GET /food/available`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodFilters {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
}

impl Default for FoodFilters {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: None,
            max_distance: None,
        }
    }
}
