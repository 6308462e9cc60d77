//! `reqwest` implementation of [`FoodShareApi`].

use crate::response;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use surplus_core::account::{AuthData, Credentials, Profile, ProfileUpdate, Registration};
use surplus_core::api::{ApiOperation, Envelope, FoodShareApi, Page};
use surplus_core::browse::{FoodFilters, FoodItem};
use surplus_core::community::{
    Feedback, FeedbackRecord, LeaderboardEntry, LeaderboardPeriod, Referral, ReferralRecord,
};
use surplus_core::config::ClientConfig;
use surplus_core::donation::{Donation, DonationFilters, DonationSubmission, ImageAttachment};
use surplus_core::request::{FoodRequest, NewFoodRequest, RequestFilters};
use surplus_core::session::Session;
use surplus_core::{Result, SurplusError};

/// HTTP client for the food-sharing backend.
///
/// Issues exactly one request per call: no retries, no timeout beyond the
/// transport default, no caching.
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: Arc<str>,
}

impl HttpApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: Arc::from(base_url.trim().trim_end_matches('/')),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.normalized_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, request: RequestBuilder, session: &Session) -> RequestBuilder {
        request.header(AUTHORIZATION, session.bearer())
    }

    async fn execute<T>(&self, operation: ApiOperation, request: RequestBuilder) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
    {
        let fallback = operation.fallback_message();
        let response = request.send().await.map_err(|err| {
            tracing::warn!("[ApiClient] {operation}: request failed: {err}");
            SurplusError::transport(err.status().map(|s| s.as_u16()), fallback)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|err| {
            tracing::warn!("[ApiClient] {operation}: failed to read body: {err}");
            SurplusError::transport(Some(status), fallback)
        })?;

        tracing::debug!("[ApiClient] {operation} -> {status} ({} bytes)", body.len());
        response::normalize(operation, status, &body)
    }
}

fn file_part(image: &ImageAttachment) -> Result<Part> {
    let content_type = if image.content_type.trim().is_empty() {
        mime_guess::from_path(&image.file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    } else {
        image.content_type.clone()
    };

    Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(&content_type)
        .map_err(|err| {
            SurplusError::validation("image", format!("Unsupported content type: {err}"))
        })
}

fn donation_form(submission: &DonationSubmission) -> Result<Form> {
    let mut form = submission
        .form_fields()
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value));
    if let Some(image) = &submission.image {
        form = form.part("donation_image", file_part(image)?);
    }
    Ok(form)
}

#[derive(serde::Serialize)]
struct LimitQuery {
    limit: u32,
}

#[async_trait]
impl FoodShareApi for HttpApiClient {
    #[tracing::instrument(skip_all, fields(email = %registration.email, role = %registration.role))]
    async fn register(&self, registration: &Registration) -> Result<Envelope<AuthData>> {
        let request = self.client.post(self.url("/auth/register")).json(registration);
        self.execute(ApiOperation::Register, request).await
    }

    #[tracing::instrument(skip_all, fields(email = %credentials.email))]
    async fn login(&self, credentials: &Credentials) -> Result<Envelope<AuthData>> {
        let request = self.client.post(self.url("/auth/login")).json(credentials);
        self.execute(ApiOperation::Login, request).await
    }

    #[tracing::instrument(skip(self, session))]
    async fn get_profile(&self, session: &Session, user_id: &str) -> Result<Envelope<Profile>> {
        let request = self.client.get(self.url(&format!("/user/profile/{user_id}")));
        self.execute(ApiOperation::GetProfile, self.authed(request, session))
            .await
    }

    #[tracing::instrument(skip(self, session))]
    async fn update_profile(
        &self,
        session: &Session,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<Envelope<Profile>> {
        let request = self
            .client
            .put(self.url(&format!("/user/update/{user_id}")))
            .json(update);
        self.execute(ApiOperation::UpdateProfile, self.authed(request, session))
            .await
    }

    #[tracing::instrument(skip(self, session))]
    async fn upload_profile_picture(
        &self,
        session: &Session,
        user_id: &str,
        picture: &ImageAttachment,
    ) -> Result<Envelope<Profile>> {
        let form = Form::new().part("profile_picture", file_part(picture)?);
        let request = self
            .client
            .post(self.url(&format!("/user/upload-profile-picture/{user_id}")))
            .multipart(form);
        self.execute(ApiOperation::UploadProfilePicture, self.authed(request, session))
            .await
    }

    #[tracing::instrument(skip_all, fields(food_item = %submission.food_item))]
    async fn create_donation(
        &self,
        session: &Session,
        submission: &DonationSubmission,
    ) -> Result<Envelope<Donation>> {
        let request = self
            .client
            .post(self.url("/donations"))
            .multipart(donation_form(submission)?);
        self.execute(ApiOperation::CreateDonation, self.authed(request, session))
            .await
    }

    #[tracing::instrument(skip(self, session))]
    async fn list_donations(
        &self,
        session: &Session,
        filters: &DonationFilters,
    ) -> Result<Envelope<Page<Donation>>> {
        let request = self.client.get(self.url("/donations")).query(filters);
        self.execute(ApiOperation::ListDonations, self.authed(request, session))
            .await
    }

    #[tracing::instrument(skip(self, session))]
    async fn get_donation(
        &self,
        session: &Session,
        donation_id: &str,
    ) -> Result<Envelope<Donation>> {
        let request = self.client.get(self.url(&format!("/donations/{donation_id}")));
        self.execute(ApiOperation::GetDonation, self.authed(request, session))
            .await
    }

    #[tracing::instrument(skip(self, session))]
    async fn list_pending_requests(
        &self,
        session: &Session,
        filters: &RequestFilters,
    ) -> Result<Envelope<Page<FoodRequest>>> {
        let request = self.client.get(self.url("/requests/pending")).query(filters);
        self.execute(ApiOperation::ListPendingRequests, self.authed(request, session))
            .await
    }

    #[tracing::instrument(skip(self, session))]
    async fn create_request(
        &self,
        session: &Session,
        new_request: &NewFoodRequest,
    ) -> Result<Envelope<FoodRequest>> {
        let request = self.client.post(self.url("/requests")).json(new_request);
        self.execute(ApiOperation::CreateRequest, self.authed(request, session))
            .await
    }

    #[tracing::instrument(skip(self, session))]
    async fn accept_request(
        &self,
        session: &Session,
        request_id: &str,
    ) -> Result<Envelope<serde_json::Value>> {
        let request = self
            .client
            .post(self.url(&format!("/requests/{request_id}/accept")));
        self.execute(ApiOperation::AcceptRequest, self.authed(request, session))
            .await
    }

    #[tracing::instrument(skip(self, session))]
    async fn fetch_available_foods(
        &self,
        session: &Session,
        filters: &FoodFilters,
    ) -> Result<Envelope<Page<FoodItem>>> {
        let request = self.client.get(self.url("/food/available")).query(filters);
        self.execute(ApiOperation::FetchAvailableFoods, self.authed(request, session))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_leaderboard(
        &self,
        period: LeaderboardPeriod,
        limit: u32,
    ) -> Result<Envelope<Vec<LeaderboardEntry>>> {
        let request = self
            .client
            .get(self.url(period.path()))
            .query(&LimitQuery { limit });
        self.execute(ApiOperation::GetLeaderboard, request).await
    }

    #[tracing::instrument(skip_all)]
    async fn submit_feedback(
        &self,
        session: &Session,
        feedback: &Feedback,
    ) -> Result<Envelope<FeedbackRecord>> {
        let request = self.client.post(self.url("/feedback")).json(feedback);
        self.execute(ApiOperation::SubmitFeedback, self.authed(request, session))
            .await
    }

    #[tracing::instrument(skip_all, fields(referred_email = %referral.referred_email))]
    async fn create_referral(
        &self,
        session: &Session,
        referral: &Referral,
    ) -> Result<Envelope<ReferralRecord>> {
        let request = self.client.post(self.url("/referrals")).json(referral);
        self.execute(ApiOperation::CreateReferral, self.authed(request, session))
            .await
    }

    #[tracing::instrument(skip_all)]
    async fn list_referrals(&self, session: &Session) -> Result<Envelope<Vec<ReferralRecord>>> {
        let request = self.client.get(self.url("/referrals"));
        self.execute(ApiOperation::ListReferrals, self.authed(request, session))
            .await
    }
}
