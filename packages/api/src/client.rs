//! # Travel API client
//!
//! [`TravelBackend`] is the async seam between the UI and the remote API: the
//! three calls the client makes, nothing more. [`HttpTravelApi`] implements it
//! over HTTP with `reqwest`, which uses the browser `fetch` API on WASM and
//! hyper on native targets.
//!
//! | Call | Request |
//! |------|---------|
//! | [`login`](TravelBackend::login) | `POST {base}auth/login` with JSON `{email, password}` |
//! | [`list_travel_plans`](TravelBackend::list_travel_plans) | `GET {base}travel/` |
//! | [`create_travel_plan`](TravelBackend::create_travel_plan) | `POST {base}travel/` with JSON `{title}` |
//!
//! Authenticated calls send `Authorization: Token <token>`. Any non-2xx status
//! becomes [`ApiError::Status`]. There are no timeouts, retries or cancellation.

use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Credentials, LoginResponse, NewTravelPlan, TravelPlan};

pub const LOGIN_PATH: &str = "auth/login";
pub const TRAVEL_PATH: &str = "travel/";

/// Async interface to the travel API.
pub trait TravelBackend {
    /// Exchange credentials for a session token.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;

    /// Fetch every plan visible to the token's owner.
    fn list_travel_plans(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<Vec<TravelPlan>, ApiError>>;

    /// Create a plan. The response body is not used.
    fn create_travel_plan(
        &self,
        token: &str,
        plan: &NewTravelPlan,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

/// `Authorization` header value for a session token.
pub fn token_header(token: &str) -> String {
    format!("Token {token}")
}

/// reqwest-backed [`TravelBackend`].
#[derive(Clone, Debug)]
pub struct HttpTravelApi {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpTravelApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn login_request(&self, credentials: &Credentials) -> RequestBuilder {
        self.http
            .post(self.config.endpoint(LOGIN_PATH))
            .json(credentials)
    }

    fn list_request(&self, token: &str) -> RequestBuilder {
        self.http
            .get(self.config.endpoint(TRAVEL_PATH))
            .header(AUTHORIZATION, token_header(token))
    }

    fn create_request(&self, token: &str, plan: &NewTravelPlan) -> RequestBuilder {
        self.http
            .post(self.config.endpoint(TRAVEL_PATH))
            .header(AUTHORIZATION, token_header(token))
            .json(plan)
    }
}

/// Turn a non-success status into [`ApiError::Status`], keeping the body for diagnostics.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

impl TravelBackend for HttpTravelApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        tracing::debug!(email = %credentials.email, "POST {LOGIN_PATH}");
        let response = self.login_request(credentials).send().await?;
        let response = check_status(response).await?;
        let body: LoginResponse = response.json().await?;
        Ok(body.token)
    }

    async fn list_travel_plans(&self, token: &str) -> Result<Vec<TravelPlan>, ApiError> {
        tracing::debug!("GET {TRAVEL_PATH}");
        let response = self.list_request(token).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn create_travel_plan(&self, token: &str, plan: &NewTravelPlan) -> Result<(), ApiError> {
        tracing::debug!(title = %plan.title, "POST {TRAVEL_PATH}");
        let response = self.create_request(token, plan).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    fn api() -> HttpTravelApi {
        HttpTravelApi::new(ApiConfig::new("http://localhost:8000/api").unwrap())
    }

    fn body_json(request: &reqwest::Request) -> serde_json::Value {
        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_login_request() {
        let creds = Credentials::new("ada@example.com", "hunter2");
        let request = api().login_request(&creds).build().unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "http://localhost:8000/api/auth/login");
        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert_eq!(
            body_json(&request),
            serde_json::json!({ "email": "ada@example.com", "password": "hunter2" })
        );
    }

    #[test]
    fn test_list_request_sends_token_header() {
        let request = api().list_request("abc123").build().unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().as_str(), "http://localhost:8000/api/travel/");
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Token abc123"
        );
    }

    #[test]
    fn test_create_request_posts_title_only() {
        let request = api()
            .create_request("abc123", &NewTravelPlan::new("Paris Trip"))
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "http://localhost:8000/api/travel/");
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Token abc123"
        );
        assert_eq!(body_json(&request), serde_json::json!({ "title": "Paris Trip" }));
    }
}
