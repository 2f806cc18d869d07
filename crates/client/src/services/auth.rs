//! Authentication service.
//!
//! Sign-in stores the bearer token and the user profile together; logout
//! clears both together. The session never holds one without the other
//! going through this service.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::api::{ApiClient, ApiError};
use crate::models::{LoginRequest, LoginResponse, SignupRequest};
use crate::session::{SessionStore, SessionUser};

/// Typed wrappers for the auth endpoints plus session bookkeeping.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    session: Arc<dyn SessionStore>,
}

impl AuthService {
    #[must_use]
    pub fn new(api: ApiClient, session: Arc<dyn SessionStore>) -> Self {
        Self { api, session }
    }

    /// `POST /auth/signin`
    ///
    /// On success the token and the user profile are written to the
    /// session store before returning.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection; the
    /// session is left untouched on failure.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.api.post("/auth/signin", &body).await?.into_result()?;

        self.session.set_token(&response.token);
        self.session.set_user(&SessionUser {
            id: response.id,
            username: response.username.clone(),
            real_name: response.real_name.clone(),
            phone: response.phone.clone(),
            gender: response.gender,
            roles: response.roles.clone(),
        });
        info!("signed in");

        Ok(response)
    }

    /// `POST /auth/signup`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn signup(&self, request: &SignupRequest) -> Result<String, ApiError> {
        self.api.post("/auth/signup", request).await?.into_result()
    }

    /// Clear token and user from the session together.
    pub fn logout(&self) {
        self.session.clear_token();
        self.session.clear_user();
        info!("signed out");
    }

    /// Whether a token is present in the session.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Whether the stored token is missing or past its expiry claim.
    #[must_use]
    pub fn is_token_expired(&self) -> bool {
        self.session.is_token_expired()
    }

    /// The signed-in user's stored profile, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<SessionUser> {
        self.session.user()
    }
}
