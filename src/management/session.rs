use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config;

/// Storage key the session token is kept under.
pub const SESSION_STORAGE_KEY: &str = "better-auth-session";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct StoredSession {
    #[serde(rename = "better-auth-session", default)]
    token: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// File-backed local storage for the session token.
pub struct SessionManager {
    path: PathBuf,
    session: StoredSession,
}

impl SessionManager {
    pub fn new(token: String, email: Option<String>) -> Self {
        Self::with_path(Self::session_path(), token, email)
    }

    pub fn with_path(path: PathBuf, token: String, email: Option<String>) -> Self {
        SessionManager {
            path,
            session: StoredSession {
                token: Some(token),
                email,
            },
        }
    }

    pub async fn load() -> Result<Self, String> {
        Self::load_from(Self::session_path()).await
    }

    pub async fn load_from(path: PathBuf) -> Result<Self, String> {
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let session: StoredSession = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { path, session })
    }

    pub async fn persist(&self) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.session).map_err(|e| e.to_string())?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Removes the stored session. Clearing a session that was never stored
    /// is not an error.
    pub async fn clear(path: &Path) -> Result<(), String> {
        match async_fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn email(&self) -> Option<&str> {
        self.session.email.as_deref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn session_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/session.json");
        path
    }
}
