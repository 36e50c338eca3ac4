//! crm-server: HTTP backend for the tutoring CRM
//!
//! Groups (subject, schedule, teacher) with CRUD, pagination and subject
//! search, plus attendance marking gated by the group's time window.
//!
//! Layers, bottom-up:
//! - [`models`]: validated domain types and pagination
//! - [`db`]: repository traits with Postgres and in-memory implementations
//! - [`clock`]: injected time-of-day source
//! - [`service`]: operation logic returning [`service::ServiceError`]
//! - [`http`]: axum router, handlers and JSON error mapping

pub mod clock;
pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use http::{build_router, run_server, AppState, ServerConfig};
