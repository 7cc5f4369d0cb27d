//! # API Module
//!
//! HTTP handlers served by taskdock's own server.
//!
//! ## Endpoints
//!
//! - [`auth`] - Forwards every `GET`/`POST` under `/api/auth/*` to the
//!   configured [`AuthFramework`](crate::auth::AuthFramework). Routing of the
//!   individual auth actions (sign-in, sign-up, session lookup, ...) belongs
//!   to the framework.
//! - [`health`] - Returns status, crate name and version for monitoring.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use taskdock::api::{auth, health};
//!
//! let app = Router::new()
//!     .route("/api/auth/{*path}", get(auth).post(auth))
//!     .route("/health", get(health))
//!     .with_state(framework);
//! ```

mod auth;
mod health;

pub use auth::auth;
pub use health::health;
