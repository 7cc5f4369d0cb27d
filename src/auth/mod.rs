//! # Auth Framework Seam
//!
//! taskdock does not implement sessions or credential storage itself. Every
//! request under `/api/auth/*` is handed to an [`AuthFramework`]
//! implementation, configured from [`AuthOptions`]: the database adapter, the
//! signing secret and email/password sign-in.
//!
//! The secret always comes from validated [`Settings`]; there is no built-in
//! development fallback.

use async_trait::async_trait;
use axum::{extract::Request, response::Response};

use crate::{config::Settings, db::Database};

/// Handles the auth routes on behalf of the server.
#[async_trait]
pub trait AuthFramework: Send + Sync {
    /// Answers one request. The request still carries its full
    /// `/api/auth/...` URI.
    async fn handle(&self, request: Request) -> Response;
}

/// Secret used by the auth framework to sign sessions. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthSecret(String);

impl AuthSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        AuthSecret(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthSecret(<redacted>)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailAndPassword {
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct AuthOptions {
    pub database: Database,
    pub secret: AuthSecret,
    pub email_and_password: EmailAndPassword,
}

impl AuthOptions {
    pub fn from_settings(settings: &Settings, database: Database) -> Self {
        AuthOptions {
            database,
            secret: AuthSecret::new(settings.auth_secret.clone()),
            email_and_password: EmailAndPassword { enabled: true },
        }
    }
}
