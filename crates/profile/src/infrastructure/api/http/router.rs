// crates/profile/src/infrastructure/api/http/router.rs

use axum::{middleware, routing::{get, put}, Router};
use crate::infrastructure::api::http::ApiState;
use crate::infrastructure::api::http::handlers::{
    get_profile, health, update_professional_status, update_profile,
};
use crate::infrastructure::api::http::middleware::require_bearer;

pub fn router(state: ApiState) -> Router {
    // Routes protégées : un jeton Bearer valide est exigé
    let users = Router::new()
        .route("/users/{id}/profile", get(get_profile).put(update_profile))
        .route("/users/{id}/professional-status", put(update_professional_status))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .route("/health", get(health))
        .merge(users)
        .with_state(state)
}
