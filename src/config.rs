//! Configuration management for taskdock.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Client-side values (API base URL,
//! session cookie) have defaults or are optional; server-side values are
//! validated once into [`Settings`] and a missing required value is an error,
//! never a silent default.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, str::FromStr};

use crate::errors::ConfigError;

pub const API_BASE_URL_VAR: &str = "TASKDOCK_API_BASE_URL";
pub const SESSION_COOKIE_VAR: &str = "TASKDOCK_COOKIE";
pub const LOG_FILTER_VAR: &str = "TASKDOCK_LOG";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const AUTH_SECRET_VAR: &str = "BETTER_AUTH_SECRET";
pub const FRONTEND_URL_VAR: &str = "FRONTEND_URL";
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";
pub const DEBUG_VAR: &str = "DEBUG";
pub const SERVER_ADDRESS_VAR: &str = "SERVER_ADDRESS";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables
/// from `taskdock/.env` under the platform-specific local data directory:
/// - Linux: `~/.local/share/taskdock/.env`
/// - macOS: `~/Library/Application Support/taskdock/.env`
/// - Windows: `%LOCALAPPDATA%/taskdock/.env`
///
/// A missing file is not an error; variables may come from the process
/// environment alone.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Root of everything taskdock keeps on disk.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("taskdock");
    path
}

/// Returns the base URL of the task backend, without trailing slash.
///
/// Read from `TASKDOCK_API_BASE_URL`, falling back to
/// `http://localhost:8000/api`.
pub fn api_base_url() -> String {
    let url = env::var(API_BASE_URL_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    url.trim_end_matches('/').to_string()
}

/// Returns the raw cookie string the session token may be stored in.
pub fn session_cookies() -> Option<String> {
    env::var(SESSION_COOKIE_VAR).ok()
}

/// Returns the tracing filter directive, `warn` unless overridden.
pub fn log_filter() -> String {
    env::var(LOG_FILTER_VAR).unwrap_or_else(|_| "warn".to_string())
}

/// Server-side settings, validated once at startup.
#[derive(Clone)]
pub struct Settings {
    pub database_url: String,
    pub auth_secret: String,
    pub frontend_url: String,
    pub backend_url: String,
    pub debug: bool,
    pub server_address: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &"<redacted>")
            .field("auth_secret", &"<redacted>")
            .field("frontend_url", &self.frontend_url)
            .field("backend_url", &self.backend_url)
            .field("debug", &self.debug)
            .field("server_address", &self.server_address)
            .finish()
    }
}

impl Settings {
    /// Reads and validates settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads and validates settings through `lookup`, which maps a variable
    /// name to its value.
    ///
    /// # Errors
    ///
    /// - `DATABASE_URL` or `BETTER_AUTH_SECRET` missing or blank
    /// - `DEBUG` not a boolean
    /// - `SERVER_ADDRESS` not a socket address
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = non_blank(DATABASE_URL_VAR).ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;
        let auth_secret = non_blank(AUTH_SECRET_VAR).ok_or(ConfigError::Missing(AUTH_SECRET_VAR))?;

        let debug = match non_blank(DEBUG_VAR) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                key: DEBUG_VAR,
                message: format!("expected a boolean, got '{}'", raw),
            })?,
            None => true,
        };

        let server_address =
            non_blank(SERVER_ADDRESS_VAR).unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        std::net::SocketAddr::from_str(&server_address).map_err(|e| ConfigError::Invalid {
            key: SERVER_ADDRESS_VAR,
            message: e.to_string(),
        })?;

        Ok(Settings {
            database_url,
            auth_secret,
            frontend_url: non_blank(FRONTEND_URL_VAR)
                .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            backend_url: non_blank(BACKEND_URL_VAR)
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            debug,
            server_address,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
