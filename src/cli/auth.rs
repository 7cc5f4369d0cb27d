use crate::{
    client::ApiClient, error, info, management::SessionManager, success, types::AuthSession,
    warning,
};

pub async fn login(email: String, password: String) {
    let client = ApiClient::from_env();
    let pb = super::spinner("Signing in...");
    let result = client.login(&email, &password).await;
    pb.finish_and_clear();

    match result {
        Ok(session) => store_session(session, "Logged in").await,
        Err(e) => error!("Login failed. Err: {}", e),
    }
}

pub async fn signup(email: String, password: String, name: String) {
    let client = ApiClient::from_env();
    let pb = super::spinner("Creating account...");
    let result = client.signup(&email, &password, &name).await;
    pb.finish_and_clear();

    match result {
        Ok(session) => store_session(session, "Account created").await,
        Err(e) => error!("Signup failed. Err: {}", e),
    }
}

pub async fn logout() {
    let client = ApiClient::from_env();
    if let Err(e) = client.logout().await {
        warning!("Backend did not confirm logout: {}", e);
    }

    match SessionManager::clear(&SessionManager::session_path()).await {
        Ok(()) => success!("Logged out."),
        Err(e) => error!("Failed to remove stored session. Err: {}", e),
    }
}

async fn store_session(session: AuthSession, action: &str) {
    let who = session
        .user
        .name
        .clone()
        .unwrap_or_else(|| session.user.email.clone());
    let manager = SessionManager::new(session.token, Some(session.user.email));
    if let Err(e) = manager.persist().await {
        error!("Failed to save session to {}: {}", manager.path().display(), e);
    }

    success!("{} as {}", action, who);
    info!("Session stored in {}", manager.path().display());
}
