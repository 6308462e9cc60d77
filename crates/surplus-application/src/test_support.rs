//! Hand-written `FoodShareApi` mock shared by the use-case tests.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use surplus_core::account::{AuthData, Credentials, Profile, ProfileUpdate, Registration};
use surplus_core::api::{ApiOperation, Envelope, FoodShareApi, Page};
use surplus_core::browse::{FoodFilters, FoodItem};
use surplus_core::community::{
    Feedback, FeedbackRecord, LeaderboardEntry, LeaderboardPeriod, Referral, ReferralRecord,
};
use surplus_core::donation::{Donation, DonationFilters, DonationSubmission, ImageAttachment};
use surplus_core::request::{FoodRequest, NewFoodRequest, RequestFilters};
use surplus_core::session::{Role, Session, SessionContext};
use surplus_core::{Result, SurplusError};
use surplus_infrastructure::MemorySessionStore;

#[derive(Debug, Clone)]
pub struct Call {
    pub operation: ApiOperation,
    pub token: Option<String>,
    pub body: Value,
}

/// Answers each operation from a queue; an empty queue answers with the
/// operation's fallback transport error.
#[derive(Default)]
pub struct MockApi {
    queued: Mutex<HashMap<ApiOperation, VecDeque<Result<Value>>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a success envelope carrying `data` (`Value::Null` for none).
    pub fn respond(&self, operation: ApiOperation, data: Value) -> &Self {
        self.push(operation, Ok(data))
    }

    pub fn fail(&self, operation: ApiOperation, err: SurplusError) -> &Self {
        self.push(operation, Err(err))
    }

    fn push(&self, operation: ApiOperation, answer: Result<Value>) -> &Self {
        self.queued
            .lock()
            .unwrap()
            .entry(operation)
            .or_default()
            .push_back(answer);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, operation: ApiOperation) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    fn answer<T: DeserializeOwned>(
        &self,
        operation: ApiOperation,
        session: Option<&Session>,
        body: Value,
    ) -> Result<Envelope<T>> {
        self.calls.lock().unwrap().push(Call {
            operation,
            token: session.map(|s| s.token.clone()),
            body,
        });
        let next = self
            .queued
            .lock()
            .unwrap()
            .get_mut(&operation)
            .and_then(VecDeque::pop_front);
        match next {
            Some(Ok(Value::Null)) => Ok(Envelope::success("ok", None)),
            Some(Ok(data)) => Ok(Envelope::success("ok", Some(serde_json::from_value(data)?))),
            Some(Err(err)) => Err(err),
            None => Err(SurplusError::transport(None, operation.fallback_message())),
        }
    }
}

#[async_trait]
impl FoodShareApi for MockApi {
    async fn register(&self, registration: &Registration) -> Result<Envelope<AuthData>> {
        self.answer(ApiOperation::Register, None, serde_json::to_value(registration)?)
    }

    async fn login(&self, credentials: &Credentials) -> Result<Envelope<AuthData>> {
        self.answer(ApiOperation::Login, None, serde_json::to_value(credentials)?)
    }

    async fn get_profile(&self, session: &Session, user_id: &str) -> Result<Envelope<Profile>> {
        self.answer(ApiOperation::GetProfile, Some(session), json!({ "user_id": user_id }))
    }

    async fn update_profile(
        &self,
        session: &Session,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<Envelope<Profile>> {
        let mut body = serde_json::to_value(update)?;
        body["user_id"] = json!(user_id);
        self.answer(ApiOperation::UpdateProfile, Some(session), body)
    }

    async fn upload_profile_picture(
        &self,
        session: &Session,
        user_id: &str,
        picture: &ImageAttachment,
    ) -> Result<Envelope<Profile>> {
        self.answer(
            ApiOperation::UploadProfilePicture,
            Some(session),
            json!({ "user_id": user_id, "file_name": picture.file_name }),
        )
    }

    async fn create_donation(
        &self,
        session: &Session,
        submission: &DonationSubmission,
    ) -> Result<Envelope<Donation>> {
        let mut body: serde_json::Map<String, Value> = submission
            .form_fields()
            .into_iter()
            .map(|(k, v)| (k.to_string(), Value::String(v)))
            .collect();
        if let Some(image) = &submission.image {
            body.insert("donation_image".into(), json!(image.file_name));
        }
        self.answer(ApiOperation::CreateDonation, Some(session), Value::Object(body))
    }

    async fn list_donations(
        &self,
        session: &Session,
        filters: &DonationFilters,
    ) -> Result<Envelope<Page<Donation>>> {
        self.answer(ApiOperation::ListDonations, Some(session), serde_json::to_value(filters)?)
    }

    async fn get_donation(
        &self,
        session: &Session,
        donation_id: &str,
    ) -> Result<Envelope<Donation>> {
        self.answer(ApiOperation::GetDonation, Some(session), json!({ "id": donation_id }))
    }

    async fn list_pending_requests(
        &self,
        session: &Session,
        filters: &RequestFilters,
    ) -> Result<Envelope<Page<FoodRequest>>> {
        self.answer(
            ApiOperation::ListPendingRequests,
            Some(session),
            serde_json::to_value(filters)?,
        )
    }

    async fn create_request(
        &self,
        session: &Session,
        request: &NewFoodRequest,
    ) -> Result<Envelope<FoodRequest>> {
        self.answer(ApiOperation::CreateRequest, Some(session), serde_json::to_value(request)?)
    }

    async fn accept_request(&self, session: &Session, request_id: &str) -> Result<Envelope<Value>> {
        self.answer(ApiOperation::AcceptRequest, Some(session), json!({ "id": request_id }))
    }

    async fn fetch_available_foods(
        &self,
        session: &Session,
        filters: &FoodFilters,
    ) -> Result<Envelope<Page<FoodItem>>> {
        self.answer(
            ApiOperation::FetchAvailableFoods,
            Some(session),
            serde_json::to_value(filters)?,
        )
    }

    async fn get_leaderboard(
        &self,
        period: LeaderboardPeriod,
        limit: u32,
    ) -> Result<Envelope<Vec<LeaderboardEntry>>> {
        self.answer(
            ApiOperation::GetLeaderboard,
            None,
            json!({ "path": period.path(), "limit": limit }),
        )
    }

    async fn submit_feedback(
        &self,
        session: &Session,
        feedback: &Feedback,
    ) -> Result<Envelope<FeedbackRecord>> {
        self.answer(ApiOperation::SubmitFeedback, Some(session), serde_json::to_value(feedback)?)
    }

    async fn create_referral(
        &self,
        session: &Session,
        referral: &Referral,
    ) -> Result<Envelope<ReferralRecord>> {
        self.answer(ApiOperation::CreateReferral, Some(session), serde_json::to_value(referral)?)
    }

    async fn list_referrals(&self, session: &Session) -> Result<Envelope<Vec<ReferralRecord>>> {
        self.answer(ApiOperation::ListReferrals, Some(session), Value::Null)
    }
}

pub fn donor_session() -> Session {
    Session::new("tok-1", "1", Role::Donor)
}

/// Session context over a memory store, optionally pre-authenticated.
pub fn context(session: Option<Session>) -> (SessionContext, Arc<MemorySessionStore>) {
    let store = Arc::new(match session {
        Some(session) => MemorySessionStore::with_session(session),
        None => MemorySessionStore::new(),
    });
    (SessionContext::new(store.clone()), store)
}
