use serde::de::IgnoredAny;

use crate::{
    errors::ApiError,
    types::{AuthSession, LoginRequest, SignupRequest},
};

use super::{ApiClient, RequestOptions};

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.request("/auth/login", RequestOptions::post().json(&body)?)
            .await
    }

    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthSession, ApiError> {
        let body = SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        };
        self.request("/auth/register", RequestOptions::post().json(&body)?)
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.request::<IgnoredAny>("/auth/logout", RequestOptions::post())
            .await?;
        Ok(())
    }
}
