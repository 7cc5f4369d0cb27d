use std::sync::Arc;

use axum::{
    extract::{Request, State},
    response::Response,
};

use crate::auth::AuthFramework;

pub async fn auth(
    State(framework): State<Arc<dyn AuthFramework>>,
    request: Request,
) -> Response {
    tracing::debug!(method = %request.method(), path = %request.uri().path(), "auth request");
    framework.handle(request).await
}
