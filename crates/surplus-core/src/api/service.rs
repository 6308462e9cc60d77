//! The remote API as a trait.

use super::envelope::{Envelope, Page};
use crate::account::{AuthData, Credentials, Profile, ProfileUpdate, Registration};
use crate::browse::{FoodFilters, FoodItem};
use crate::community::{
    Feedback, FeedbackRecord, LeaderboardEntry, LeaderboardPeriod, Referral, ReferralRecord,
};
use crate::donation::{Donation, DonationFilters, DonationSubmission, ImageAttachment};
use crate::error::Result;
use crate::request::{FoodRequest, NewFoodRequest, RequestFilters};
use crate::session::Session;
use async_trait::async_trait;

/// Client-side view of the food-sharing backend.
///
/// Every operation issues exactly one request and either returns a success
/// envelope or fails with a [`SurplusError`](crate::error::SurplusError)
/// carrying the server message or the operation's fallback text. No retry,
/// timeout or caching is applied.
#[async_trait]
pub trait FoodShareApi: Send + Sync {
    async fn register(&self, registration: &Registration) -> Result<Envelope<AuthData>>;

    async fn login(&self, credentials: &Credentials) -> Result<Envelope<AuthData>>;

    async fn get_profile(&self, session: &Session, user_id: &str) -> Result<Envelope<Profile>>;

    async fn update_profile(
        &self,
        session: &Session,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<Envelope<Profile>>;

    async fn upload_profile_picture(
        &self,
        session: &Session,
        user_id: &str,
        picture: &ImageAttachment,
    ) -> Result<Envelope<Profile>>;

    async fn create_donation(
        &self,
        session: &Session,
        submission: &DonationSubmission,
    ) -> Result<Envelope<Donation>>;

    async fn list_donations(
        &self,
        session: &Session,
        filters: &DonationFilters,
    ) -> Result<Envelope<Page<Donation>>>;

    async fn get_donation(&self, session: &Session, donation_id: &str)
    -> Result<Envelope<Donation>>;

    async fn list_pending_requests(
        &self,
        session: &Session,
        filters: &RequestFilters,
    ) -> Result<Envelope<Page<FoodRequest>>>;

    async fn create_request(
        &self,
        session: &Session,
        request: &NewFoodRequest,
    ) -> Result<Envelope<FoodRequest>>;

    async fn accept_request(
        &self,
        session: &Session,
        request_id: &str,
    ) -> Result<Envelope<serde_json::Value>>;

    async fn fetch_available_foods(
        &self,
        session: &Session,
        filters: &FoodFilters,
    ) -> Result<Envelope<Page<FoodItem>>>;

    async fn get_leaderboard(
        &self,
        period: LeaderboardPeriod,
        limit: u32,
    ) -> Result<Envelope<Vec<LeaderboardEntry>>>;

    async fn submit_feedback(
        &self,
        session: &Session,
        feedback: &Feedback,
    ) -> Result<Envelope<FeedbackRecord>>;

    async fn create_referral(
        &self,
        session: &Session,
        referral: &Referral,
    ) -> Result<Envelope<ReferralRecord>>;

    async fn list_referrals(&self, session: &Session) -> Result<Envelope<Vec<ReferralRecord>>>;
}
