use std::path::PathBuf;

use async_trait::async_trait;

use crate::{config, management::SessionManager, utils};

/// Cookie the auth framework keeps the session token in.
pub const SESSION_COOKIE_NAME: &str = "better-auth.session_token";

/// Source of the bearer token attached to outgoing requests.
///
/// Resolved once per request; returning `None` means the request is sent
/// without an `Authorization` header.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn resolve(&self) -> Option<String>;
}

/// Provider for contexts with no session storage at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

#[async_trait]
impl TokenProvider for NoToken {
    async fn resolve(&self) -> Option<String> {
        None
    }
}

/// Always hands out the same token.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

#[async_trait]
impl TokenProvider for StaticToken {
    async fn resolve(&self) -> Option<String> {
        Some(self.0.clone()).filter(|t| !t.is_empty())
    }
}

/// Looks in local session storage first, then in the cookie string.
#[derive(Debug, Clone)]
pub struct SessionTokenProvider {
    storage_path: PathBuf,
    cookies: Option<String>,
}

impl SessionTokenProvider {
    pub fn new(storage_path: PathBuf, cookies: Option<String>) -> Self {
        SessionTokenProvider {
            storage_path,
            cookies,
        }
    }

    pub fn from_env() -> Self {
        Self::new(SessionManager::session_path(), config::session_cookies())
    }
}

#[async_trait]
impl TokenProvider for SessionTokenProvider {
    async fn resolve(&self) -> Option<String> {
        let stored = match SessionManager::load_from(self.storage_path.clone()).await {
            Ok(session) => session.token().map(str::to_string),
            Err(e) => {
                tracing::trace!(path = %self.storage_path.display(), error = %e, "no stored session");
                None
            }
        };

        resolve_token(stored.as_deref(), self.cookies.as_deref())
    }
}

/// Picks the stored token if there is a non-empty one, otherwise the session
/// cookie's value.
pub fn resolve_token(stored: Option<&str>, cookies: Option<&str>) -> Option<String> {
    stored
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| cookies.and_then(|c| utils::cookie_value(c, SESSION_COOKIE_NAME)))
}
