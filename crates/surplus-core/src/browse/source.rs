//! Data-source interface behind the browse view.

use super::model::{DistanceThreshold, FoodItem};
use crate::error::Result;
use async_trait::async_trait;

/// Supplies the items within a distance threshold.
///
/// Implementations must be monotonic: every item returned for a threshold
/// is also returned for any larger threshold.
#[async_trait]
pub trait DonationSource: Send + Sync {
    /// Short name used in logs (e.g. "remote", "fixture").
    fn name(&self) -> &str;

    /// Fetches the full result set for `threshold`, replacing any earlier one.
    async fn fetch_within(&self, threshold: DistanceThreshold) -> Result<Vec<FoodItem>>;
}
