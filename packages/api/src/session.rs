//! # Session facade
//!
//! [`Session`] owns the auth token for the lifetime of the app (or until
//! [`logout`](Session::logout)) and is passed explicitly to everything that
//! needs it. Login failure is binary: bad credentials, a server error and an
//! unreachable server all report `false`.

use crate::client::TravelBackend;
use crate::error::ApiError;
use crate::models::{Credentials, NewTravelPlan, TravelPlan};

/// Authentication state: the token returned by the last successful login.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The token, or [`ApiError::NotAuthenticated`] when logged out.
    pub fn require_token(&self) -> Result<&str, ApiError> {
        self.token().ok_or(ApiError::NotAuthenticated)
    }

    /// Record the outcome of a login call. Returns whether it succeeded.
    ///
    /// A failed login leaves any existing token in place.
    pub fn apply_login(&mut self, result: Result<String, ApiError>) -> bool {
        match result {
            Ok(token) if !token.is_empty() => {
                tracing::info!("login succeeded");
                self.token = Some(token);
                true
            }
            Ok(_) => {
                tracing::warn!("login returned an empty token");
                false
            }
            Err(e) => {
                tracing::warn!("login failed: {e}");
                false
            }
        }
    }

    /// Log in through `backend`. Returns whether it succeeded.
    pub async fn login<B: TravelBackend>(&mut self, backend: &B, credentials: &Credentials) -> bool {
        let result = backend.login(credentials).await;
        self.apply_login(result)
    }

    pub fn logout(&mut self) {
        self.token = None;
    }

    /// List plans with this session's token.
    pub async fn list_travel_plans<B: TravelBackend>(
        &self,
        backend: &B,
    ) -> Result<Vec<TravelPlan>, ApiError> {
        backend.list_travel_plans(self.require_token()?).await
    }

    /// Create a plan with this session's token.
    pub async fn create_travel_plan<B: TravelBackend>(
        &self,
        backend: &B,
        plan: &NewTravelPlan,
    ) -> Result<(), ApiError> {
        backend.create_travel_plan(self.require_token()?, plan).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Call, MockBackend};

    #[tokio::test]
    async fn test_login_success_stores_token() {
        let backend = MockBackend::new().with_token("tok-1");
        let mut session = Session::new();

        assert!(session.login(&backend, &Credentials::new("a@b.c", "pw")).await);
        assert_eq!(session.token(), Some("tok-1"));
        assert!(session.is_authenticated());
        assert_eq!(backend.calls(), vec![Call::Login("a@b.c".to_string())]);
    }

    #[tokio::test]
    async fn test_login_failure_is_false_and_keeps_token() {
        let backend = MockBackend::new();
        let mut session = Session::with_token("old");

        assert!(!session.login(&backend, &Credentials::new("a@b.c", "bad")).await);
        assert_eq!(session.token(), Some("old"));
    }

    #[test]
    fn test_empty_token_is_failure() {
        let mut session = Session::new();
        assert!(!session.apply_login(Ok(String::new())));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_any_login_error_is_failure() {
        let mut session = Session::with_token("old");
        let rejected = Err(ApiError::Status {
            status: 400,
            body: "{\"non_field_errors\":[\"bad\"]}".to_string(),
        });
        assert!(!session.apply_login(rejected));
        assert!(!session.apply_login(Err(ApiError::Config("offline".to_string()))));
        assert_eq!(session.token(), Some("old"));
    }

    #[test]
    fn test_logout_clears_token() {
        let mut session = Session::with_token("tok");
        session.logout();
        assert!(session.token().is_none());
        assert!(matches!(session.require_token(), Err(ApiError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn test_calls_without_token_skip_the_backend() {
        let backend = MockBackend::new();
        let session = Session::new();

        let listed = session.list_travel_plans(&backend).await;
        assert!(matches!(listed, Err(ApiError::NotAuthenticated)));

        let created = session
            .create_travel_plan(&backend, &NewTravelPlan::new("Paris Trip"))
            .await;
        assert!(matches!(created, Err(ApiError::NotAuthenticated)));

        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_authenticated_calls_pass_token() {
        let backend = MockBackend::new();
        let session = Session::with_token("tok");

        session.list_travel_plans(&backend).await.unwrap();
        session
            .create_travel_plan(&backend, &NewTravelPlan::new("Paris Trip"))
            .await
            .unwrap();

        assert_eq!(
            backend.calls(),
            vec![
                Call::ListPlans("tok".to_string()),
                Call::CreatePlan("tok".to_string(), "Paris Trip".to_string()),
            ]
        );
    }
}
