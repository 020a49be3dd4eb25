//! In-memory [`TravelBackend`] that records every call, for tests.
//!
//! Available under `cfg(test)` and the `mock` feature so dependent crates can
//! drive their workflows without a server.

use std::cell::RefCell;

use crate::client::TravelBackend;
use crate::error::ApiError;
use crate::models::{Credentials, NewTravelPlan, TravelPlan};

/// A call observed by [`MockBackend`], in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Login attempt, with the email used.
    Login(String),
    /// Plan listing, with the token used.
    ListPlans(String),
    /// Plan creation, with the token and title used.
    CreatePlan(String, String),
}

/// Scriptable backend. Logins fail unless a token is configured; listings
/// return the stored plans; creations append a plan with the next id.
#[derive(Debug, Default)]
pub struct MockBackend {
    token: Option<String>,
    plans: RefCell<Vec<TravelPlan>>,
    list_failure: RefCell<Option<u16>>,
    create_failure: RefCell<Option<u16>>,
    calls: RefCell<Vec<Call>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept every login and hand out `token`.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_plans(self, plans: Vec<TravelPlan>) -> Self {
        *self.plans.borrow_mut() = plans;
        self
    }

    /// Make subsequent listings fail with `status`, or succeed again with `None`.
    pub fn fail_list(&self, status: Option<u16>) {
        *self.list_failure.borrow_mut() = status;
    }

    /// Make subsequent creations fail with `status`, or succeed again with `None`.
    pub fn fail_create(&self, status: Option<u16>) {
        *self.create_failure.borrow_mut() = status;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

/// A plan with only an id and a title, as the server returns after a title-only create.
pub fn plan(id: i64, title: &str) -> TravelPlan {
    TravelPlan {
        id,
        title: title.to_string(),
        start_date: None,
        end_date: None,
        description: String::new(),
    }
}

impl TravelBackend for MockBackend {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        self.record(Call::Login(credentials.email.clone()));
        self.token.clone().ok_or(ApiError::Status {
            status: 400,
            body: "Unable to log in with provided credentials.".to_string(),
        })
    }

    async fn list_travel_plans(&self, token: &str) -> Result<Vec<TravelPlan>, ApiError> {
        self.record(Call::ListPlans(token.to_string()));
        if let Some(status) = *self.list_failure.borrow() {
            return Err(ApiError::Status {
                status,
                body: String::new(),
            });
        }
        Ok(self.plans.borrow().clone())
    }

    async fn create_travel_plan(&self, token: &str, new_plan: &NewTravelPlan) -> Result<(), ApiError> {
        self.record(Call::CreatePlan(token.to_string(), new_plan.title.clone()));
        if let Some(status) = *self.create_failure.borrow() {
            return Err(ApiError::Status {
                status,
                body: String::new(),
            });
        }
        let mut plans = self.plans.borrow_mut();
        let id = plans.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        plans.push(plan(id, &new_plan.title));
        Ok(())
    }
}
