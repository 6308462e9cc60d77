//! Profile viewing and editing for the signed-in user.

use std::sync::Arc;
use surplus_core::account::{Profile, ProfileUpdate, validate_profile_picture};
use surplus_core::api::FoodShareApi;
use surplus_core::donation::ImageAttachment;
use surplus_core::session::SessionContext;
use surplus_core::{Result, SurplusError};

pub struct ProfileService {
    api: Arc<dyn FoodShareApi>,
    session: SessionContext,
}

impl ProfileService {
    pub fn new(api: Arc<dyn FoodShareApi>, session: SessionContext) -> Self {
        Self { api, session }
    }

    pub async fn get(&self) -> Result<Profile> {
        let session = self.session.require()?;
        self.session
            .guard(self.api.get_profile(&session, &session.user_id).await)?
            .into_data()
    }

    /// Sends only the fields present in `update`.
    pub async fn update(&self, update: &ProfileUpdate) -> Result<Profile> {
        if update.is_empty() {
            return Err(SurplusError::validation("profile", "Nothing to update"));
        }
        let session = self.session.require()?;
        self.session
            .guard(
                self.api
                    .update_profile(&session, &session.user_id, update)
                    .await,
            )?
            .into_data()
    }

    pub async fn upload_picture(&self, picture: &ImageAttachment) -> Result<Profile> {
        validate_profile_picture(picture)?;
        let session = self.session.require()?;
        self.session
            .guard(
                self.api
                    .upload_profile_picture(&session, &session.user_id, picture)
                    .await,
            )?
            .into_data()
    }
}
