//! # API crate: client side of the travel planner REST API
//!
//! Everything the pages need to talk to the remote server: the wire models, the
//! HTTP client and the session that carries the auth token. The server itself is
//! an external collaborator with a fixed schema (`POST auth/login`,
//! `GET travel/`, `POST travel/`).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`TravelBackend`] trait and its `reqwest` implementation [`HttpTravelApi`] |
//! | [`config`] | [`ApiConfig`]: base URL from `VITE_API_URL` |
//! | [`error`] | [`ApiError`] |
//! | [`models`] | [`Credentials`], [`TravelPlan`], [`NewTravelPlan`], [`LoginResponse`] |
//! | [`session`] | [`Session`]: login facade and token holder |
//! | `mock` | recording [`TravelBackend`] for tests (feature `mock`) |

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use client::{HttpTravelApi, TravelBackend};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{Credentials, LoginResponse, NewTravelPlan, TravelPlan};
pub use session::Session;
