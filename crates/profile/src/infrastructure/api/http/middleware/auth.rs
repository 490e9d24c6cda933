// crates/profile/src/infrastructure/api/http/middleware/auth.rs

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use shared_kernel::errors::DomainError;

use crate::infrastructure::api::http::ApiState;
use crate::infrastructure::api::http::mappers::HttpError;

/// Résout le jeton `Authorization: Bearer <token>` et injecte l'`Actor` dans la requête.
pub async fn require_bearer(
    State(state): State<ApiState>,
    mut request: Request,
    next: Next,
) -> Result<Response, HttpError> {
    // 1. Extraction du jeton
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| unauthorized("Missing bearer token"))?
        .to_owned();

    // 2. Résolution de la session
    let session = state.sessions
        .resolve(&token)
        .await?
        .ok_or_else(|| unauthorized("Invalid or expired token"))?;

    // 3. Propagation de l'identité aux handlers
    request.extensions_mut().insert(session.actor());
    Ok(next.run(request).await)
}

fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

fn unauthorized(reason: &str) -> DomainError {
    DomainError::Unauthorized { reason: reason.into() }
}
