//! Browse domain module: available food, the distance threshold and the
//! data-source interface the browse view queries.

mod model;
mod source;

pub use model::{DistanceThreshold, FoodFilters, FoodItem};
pub use source::DonationSource;
