//! Wires the client together from a [`ClientConfig`].

use std::sync::Arc;
use surplus_core::Result;
use surplus_core::api::FoodShareApi;
use surplus_core::browse::DonationSource;
use surplus_core::config::{BrowseSourceKind, ClientConfig};
use surplus_core::session::{SessionContext, SessionStore};
use surplus_infrastructure::{FileSessionStore, FixtureDonationSource};
use surplus_interaction::{HttpApiClient, RemoteDonationSource};

use crate::auth_service::AuthService;
use crate::browse::BrowseController;
use crate::community_service::CommunityService;
use crate::donation_wizard::DonationWizard;
use crate::marketplace_service::MarketplaceService;
use crate::profile_service::ProfileService;

/// Shared handles for every use case.
#[derive(Clone)]
pub struct SurplusApp {
    config: ClientConfig,
    api: Arc<dyn FoodShareApi>,
    session: SessionContext,
    source: Arc<dyn DonationSource>,
}

impl SurplusApp {
    /// Production wiring: HTTP client, file-backed session, and the browse
    /// source selected by `browse_source`.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let store: Arc<dyn SessionStore> = match &config.session_file {
            Some(path) => Arc::new(FileSessionStore::with_path(path.clone())),
            None => Arc::new(FileSessionStore::new()?),
        };
        let api: Arc<dyn FoodShareApi> = Arc::new(HttpApiClient::from_config(&config));
        Ok(Self::with_parts(config, api, store))
    }

    /// Wiring over caller-supplied API and store.
    pub fn with_parts(
        config: ClientConfig,
        api: Arc<dyn FoodShareApi>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        let session = SessionContext::new(store);
        let source: Arc<dyn DonationSource> = match config.browse_source {
            BrowseSourceKind::Remote => {
                Arc::new(RemoteDonationSource::new(api.clone(), session.clone()))
            }
            BrowseSourceKind::Fixture => Arc::new(FixtureDonationSource::new()),
        };
        tracing::debug!(
            "[Bootstrap] api={} browse_source={}",
            config.normalized_base_url(),
            source.name()
        );
        Self {
            config,
            api,
            session,
            source,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api(&self) -> &dyn FoodShareApi {
        self.api.as_ref()
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.api.clone(), self.session.clone())
    }

    pub fn profile(&self) -> ProfileService {
        ProfileService::new(self.api.clone(), self.session.clone())
    }

    pub fn marketplace(&self) -> MarketplaceService {
        MarketplaceService::new(self.api.clone(), self.session.clone())
    }

    pub fn community(&self) -> CommunityService {
        CommunityService::new(self.api.clone(), self.session.clone())
    }

    pub fn browse(&self) -> BrowseController {
        BrowseController::new(self.source.clone())
    }

    /// Browse controller over the remote source narrowed by a search term.
    /// The fixture source ignores the term.
    pub fn browse_search(&self, search: &str) -> BrowseController {
        match self.config.browse_source {
            BrowseSourceKind::Remote => BrowseController::new(Arc::new(
                RemoteDonationSource::new(self.api.clone(), self.session.clone())
                    .with_search(search),
            )),
            BrowseSourceKind::Fixture => self.browse(),
        }
    }

    pub fn wizard(&self) -> DonationWizard {
        DonationWizard::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockApi;
    use surplus_core::config::BrowseSourceKind;
    use surplus_infrastructure::MemorySessionStore;

    #[test]
    fn browse_source_follows_config() {
        let api = MockApi::new();
        let fixture = SurplusApp::with_parts(
            ClientConfig {
                browse_source: BrowseSourceKind::Fixture,
                ..Default::default()
            },
            api.clone(),
            Arc::new(MemorySessionStore::new()),
        );
        assert_eq!(fixture.browse().source_name(), "fixture");

        let remote = SurplusApp::with_parts(
            ClientConfig::default(),
            api,
            Arc::new(MemorySessionStore::new()),
        );
        assert_eq!(remote.browse().source_name(), "remote");
        assert_eq!(remote.browse_search("rice").source_name(), "remote");
    }

    #[test]
    fn configured_session_file_is_used() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = ClientConfig {
            session_file: Some(dir.path().join("session.toml")),
            ..Default::default()
        };
        let app = SurplusApp::from_config(config).unwrap();
        assert!(!app.session().is_authenticated());
    }
}
