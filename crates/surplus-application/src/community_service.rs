//! Leaderboard, feedback and referrals.

use std::sync::Arc;
use surplus_core::Result;
use surplus_core::api::FoodShareApi;
use surplus_core::community::{
    Feedback, FeedbackRecord, LeaderboardEntry, LeaderboardPeriod, Referral, ReferralRecord,
};
use surplus_core::session::SessionContext;

pub const DEFAULT_LEADERBOARD_LIMIT: u32 = 10;

pub struct CommunityService {
    api: Arc<dyn FoodShareApi>,
    session: SessionContext,
}

impl CommunityService {
    pub fn new(api: Arc<dyn FoodShareApi>, session: SessionContext) -> Self {
        Self { api, session }
    }

    /// Public ranking; no session needed.
    pub async fn leaderboard(
        &self,
        period: LeaderboardPeriod,
        limit: u32,
    ) -> Result<Vec<LeaderboardEntry>> {
        let envelope = self.api.get_leaderboard(period, limit.max(1)).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    pub async fn feedback(&self, feedback: &Feedback) -> Result<FeedbackRecord> {
        feedback.validate()?;
        let session = self.session.require()?;
        self.session
            .guard(self.api.submit_feedback(&session, feedback).await)?
            .into_data()
    }

    pub async fn refer(&self, referral: &Referral) -> Result<ReferralRecord> {
        referral.validate()?;
        let session = self.session.require()?;
        self.session
            .guard(self.api.create_referral(&session, referral).await)?
            .into_data()
    }

    pub async fn referrals(&self) -> Result<Vec<ReferralRecord>> {
        let session = self.session.require()?;
        let envelope = self.session.guard(self.api.list_referrals(&session).await)?;
        Ok(envelope.data.unwrap_or_default())
    }
}
