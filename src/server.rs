use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Router, routing::get};

use crate::{Res, api, auth::AuthFramework, config::Settings};

pub fn router(framework: Arc<dyn AuthFramework>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/auth/{*path}", get(api::auth).post(api::auth))
        .with_state(framework)
}

pub async fn start_server(settings: &Settings, framework: Arc<dyn AuthFramework>) -> Res<()> {
    let addr = SocketAddr::from_str(&settings.server_address)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, frontend = %settings.frontend_url, "auth server listening");

    axum::serve(listener, router(framework)).await?;
    Ok(())
}
