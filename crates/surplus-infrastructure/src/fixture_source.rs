//! Fixed in-memory listing for demos and offline use.

use async_trait::async_trait;
use surplus_core::Result;
use surplus_core::browse::{DistanceThreshold, DonationSource, FoodItem};
use surplus_core::donation::DonationStatus;

/// `(id, name, category, description, distance_km, image)`
const FIXTURE: [(&str, &str, &str, &str, f64, &str); 6] = [
    ("1", "Fresh Vegetable Platter", "Vegetables", "Assorted fresh vegetables from local farm", 2.5, "/veg platter.jpg"),
    ("2", "Homemade Lasagna", "Cooked Meal", "Freshly made lasagna with meat and cheese", 1.8, "/lasanga.jpg"),
    ("3", "Rotis and Breads", "Bakery", "Various breads from local bakery", 3.2, "/roti.jpg"),
    ("4", "Fruit Basket", "Fruits", "Seasonal fruits including apples, bananas and oranges", 4.7, "/fruit basket.jpg"),
    ("5", "Rice and Curry", "Cooked Meal", "Vegetable curry with steamed rice", 1.2, "/rice.jpg"),
    ("6", "Sandwich Platter", "Prepared Food", "Assorted sandwiches with different fillings", 2.9, "/sandwich.jpg"),
];

/// Serves the six fixture listings filtered by distance.
#[derive(Debug, Clone)]
pub struct FixtureDonationSource {
    items: Vec<FoodItem>,
}

impl FixtureDonationSource {
    pub fn new() -> Self {
        let items = FIXTURE
            .iter()
            .map(|(id, name, category, description, distance, image)| FoodItem {
                id: id.to_string(),
                name: name.to_string(),
                category: Some(category.to_string()),
                description: Some(description.to_string()),
                quantity: None,
                expiry_date: None,
                status: Some(DonationStatus::Available),
                distance_km: Some(*distance),
                image: Some(image.to_string()),
            })
            .collect();
        Self { items }
    }

    /// Source over arbitrary items, for tests.
    pub fn with_items(items: Vec<FoodItem>) -> Self {
        Self { items }
    }
}

impl Default for FixtureDonationSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DonationSource for FixtureDonationSource {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn fetch_within(&self, threshold: DistanceThreshold) -> Result<Vec<FoodItem>> {
        let items: Vec<FoodItem> = self
            .items
            .iter()
            .filter(|item| threshold.includes(item))
            .cloned()
            .collect();
        tracing::debug!("[Browse] fixture returned {} items within {}", items.len(), threshold);
        Ok(items)
    }
}
