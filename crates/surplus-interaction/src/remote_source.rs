//! Browse source backed by `GET /food/available`.

use async_trait::async_trait;
use std::sync::Arc;
use surplus_core::Result;
use surplus_core::api::FoodShareApi;
use surplus_core::browse::{DistanceThreshold, DonationSource, FoodFilters, FoodItem};
use surplus_core::session::SessionContext;

const PAGE_LIMIT: u32 = 50;
const MAX_PAGES: u32 = 20;

pub struct RemoteDonationSource {
    api: Arc<dyn FoodShareApi>,
    session: SessionContext,
    search: Option<String>,
}

impl RemoteDonationSource {
    pub fn new(api: Arc<dyn FoodShareApi>, session: SessionContext) -> Self {
        Self {
            api,
            session,
            search: None,
        }
    }

    /// Restricts results to a free-text search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = (!search.trim().is_empty()).then_some(search);
        self
    }
}

#[async_trait]
impl DonationSource for RemoteDonationSource {
    fn name(&self) -> &str {
        "remote"
    }

    async fn fetch_within(&self, threshold: DistanceThreshold) -> Result<Vec<FoodItem>> {
        let session = self.session.require()?;
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let filters = FoodFilters {
                page,
                limit: PAGE_LIMIT,
                search: self.search.clone(),
                max_distance: Some(threshold.km()),
            };
            let envelope = self
                .session
                .guard(self.api.fetch_available_foods(&session, &filters).await)?;
            let Some(listing) = envelope.data else {
                break;
            };

            let more = listing.has_next() && !listing.is_empty();
            // the server may ignore max_distance; enforce it here as well
            items.extend(
                listing
                    .items
                    .into_iter()
                    .filter(|item| threshold.includes(item)),
            );
            if !more {
                break;
            }
            if page >= MAX_PAGES {
                tracing::warn!("[Browse] stopping after {MAX_PAGES} pages of available food");
                break;
            }
            page += 1;
        }

        tracing::debug!("[Browse] remote returned {} items within {}", items.len(), threshold);
        Ok(items)
    }
}
