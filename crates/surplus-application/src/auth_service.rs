//! Registration, login and logout.

use std::sync::Arc;
use surplus_core::account::{AuthData, Credentials, RegistrationForm};
use surplus_core::api::{Envelope, FoodShareApi};
use surplus_core::session::{Role, Session, SessionContext};
use surplus_core::{Result, SurplusError};

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub session: Session,
    pub full_name: Option<String>,
    pub message: String,
}

impl LoginOutcome {
    /// Route the client should open next.
    pub fn landing_path(&self) -> &'static str {
        self.session.role.landing_path()
    }
}

/// Owns the only writes to the session store: sign-in, sign-up, sign-out.
pub struct AuthService {
    api: Arc<dyn FoodShareApi>,
    session: SessionContext,
}

impl AuthService {
    pub fn new(api: Arc<dyn FoodShareApi>, session: SessionContext) -> Self {
        Self { api, session }
    }

    /// Validates the form locally, then registers the account.
    ///
    /// When the server issues a token with the new account, the session is
    /// started right away.
    pub async fn register(&self, form: &RegistrationForm) -> Result<Envelope<AuthData>> {
        let registration = form.validate()?;
        let envelope = self.api.register(&registration).await?;

        if let Some(data) = &envelope.data {
            if let Some(token) = data.token.as_deref().filter(|t| !t.is_empty()) {
                self.session
                    .begin(Session::new(token, data.user_id.clone(), data.role))?;
            }
        }
        tracing::info!("[Auth] Registered {} as {}", registration.email, registration.role);
        Ok(envelope)
    }

    /// Logs in and stores the session. Nothing is written unless the server
    /// returned a token, a user id and a role.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome> {
        credentials.validate()?;
        let envelope = self.api.login(credentials).await?;
        let message = envelope.message.clone();
        let data = envelope.into_data()?;

        let token = data
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| SurplusError::bad_response("Login response did not include a token"))?;
        if data.user_id.is_empty() {
            return Err(SurplusError::bad_response("Login response did not include a user id"));
        }

        let session = Session::new(token, data.user_id, data.role);
        self.session.begin(session.clone())?;
        Ok(LoginOutcome {
            session,
            full_name: data.full_name,
            message,
        })
    }

    pub fn logout(&self) -> Result<()> {
        self.session.end()
    }

    pub fn current(&self) -> Result<Option<Session>> {
        self.session.current()
    }

    /// Role of the signed-in user, if any.
    pub fn role(&self) -> Result<Option<Role>> {
        Ok(self.current()?.map(|s| s.role))
    }
}
