//! Donation listings and food requests.

use serde_json::Value;
use std::sync::Arc;
use surplus_core::Result;
use surplus_core::api::{Envelope, FoodShareApi, Page};
use surplus_core::donation::{Donation, DonationFilters};
use surplus_core::request::{FoodRequest, NewFoodRequest, RequestFilters};
use surplus_core::session::SessionContext;

/// Read-only donation projections plus the request actions. Status changes
/// only happen through these actions, never by editing a projection.
pub struct MarketplaceService {
    api: Arc<dyn FoodShareApi>,
    session: SessionContext,
}

impl MarketplaceService {
    pub fn new(api: Arc<dyn FoodShareApi>, session: SessionContext) -> Self {
        Self { api, session }
    }

    pub async fn donations(&self, filters: &DonationFilters) -> Result<Page<Donation>> {
        let session = self.session.require()?;
        let envelope = self
            .session
            .guard(self.api.list_donations(&session, filters).await)?;
        Ok(envelope.data.unwrap_or_else(|| empty_page(filters.page, filters.limit)))
    }

    pub async fn donation(&self, donation_id: &str) -> Result<Donation> {
        let session = self.session.require()?;
        self.session
            .guard(self.api.get_donation(&session, donation_id).await)?
            .into_data()
    }

    pub async fn pending_requests(&self, filters: &RequestFilters) -> Result<Page<FoodRequest>> {
        let session = self.session.require()?;
        let envelope = self
            .session
            .guard(self.api.list_pending_requests(&session, filters).await)?;
        Ok(envelope.data.unwrap_or_else(|| empty_page(filters.page, filters.limit)))
    }

    pub async fn request(&self, request: &NewFoodRequest) -> Result<Envelope<FoodRequest>> {
        request.validate()?;
        let session = self.session.require()?;
        let envelope = self
            .session
            .guard(self.api.create_request(&session, request).await)?;
        tracing::info!("[Marketplace] Requested donation {}", request.donation_id);
        Ok(envelope)
    }

    pub async fn accept(&self, request_id: &str) -> Result<Envelope<Value>> {
        let session = self.session.require()?;
        let envelope = self
            .session
            .guard(self.api.accept_request(&session, request_id).await)?;
        tracing::info!("[Marketplace] Accepted request {request_id}");
        Ok(envelope)
    }
}

fn empty_page<T>(page: u32, limit: u32) -> Page<T> {
    Page {
        items: Vec::new(),
        total: 0,
        page,
        limit,
        total_pages: 0,
    }
}
