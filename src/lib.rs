//! # Board Games API
//!
//! A small REST API over a board game catalogue whose interesting part is the
//! request pipeline in front of it.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, store/repository traits, clock
//! - **Application Layer** ([`application`]) - Admission gate, catalogue service, pagination
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory catalogue and throttle store
//! - **API Layer** ([`api`]) - Handlers, result envelope, filter chain and middleware
//!
//! ## Request Pipeline
//!
//! 1. Fault boundary: panics become a `500` error envelope
//! 2. Filter chain: the admission gate throttles repeated calls of the same
//!    bearer credential under `/api/games`, answering `429`
//! 3. Handler: the outcome is wrapped in [`api::dto::envelope::ApiResult`]
//!    or, for lists, [`api::dto::envelope::PagedApiResult`]
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -H "Authorization: Bearer demo" "http://localhost:3000/api/games?page=2&size=5"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::envelope::{ApiResult, PagedApiResult};
    pub use crate::application::pagination::{PagedList, paginate};
    pub use crate::application::services::{Admission, AdmissionGate, GameService};
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Game, NewGame};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
