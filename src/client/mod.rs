//! # Task API Client
//!
//! This module is the integration layer between taskdock and the task
//! backend's REST API. It takes care of building requests, attaching the
//! session token, decoding the `{ success, data, error }` envelope and
//! reshaping backend task records into application [`Task`](crate::types::Task)s.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Client Façade (auth.rs, tasks.rs)
//!          ↓
//! Dispatcher (dispatch.rs) ← TokenProvider (token.rs)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Task backend
//! ```
//!
//! ## API Coverage
//!
//! - `POST /auth/login`, `POST /auth/register`, `POST /auth/logout`
//! - `GET /tasks[?status=&limit=&offset=]`, `POST /tasks`
//! - `GET /tasks/{id}`, `PUT /tasks/{id}`, `DELETE /tasks/{id}`
//! - `PATCH /tasks/{id}/toggle-status`
//!
//! ## Error Handling
//!
//! Every call returns `Result<_, ApiError>`. The dispatcher never retries
//! and adds no timeout of its own; see [`ApiError`](crate::errors::ApiError)
//! for the failure kinds.
//!
//! ## Usage
//!
//! ```rust
//! let client = ApiClient::from_env();
//! let session = client.login("ada@example.com", "hunter2").await?;
//! let tasks = client.list_tasks(&ListTasksQuery::default()).await?;
//! ```

mod auth;
mod dispatch;
mod tasks;
mod token;

use std::sync::Arc;

use reqwest::Client;

use crate::config;

pub use dispatch::{RequestOptions, decode_response, merge_headers};
pub use tasks::{task_path, tasks_path, toggle_path};
pub use token::{
    NoToken, SESSION_COOKIE_NAME, SessionTokenProvider, StaticToken, TokenProvider, resolve_token,
};

/// Client for the task backend. Cheap to clone; clones share the HTTP
/// connection pool and the token provider.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        let base_url: String = base_url.into();
        ApiClient {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    /// Client against the configured base URL, authenticated from the local
    /// session store or the session cookie.
    pub fn from_env() -> Self {
        Self::new(
            config::api_base_url(),
            Arc::new(SessionTokenProvider::from_env()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
