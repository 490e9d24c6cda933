// crates/profile/src/infrastructure/api/http/handlers/profile_handler.rs

use std::str::FromStr;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use shared_kernel::application::{FromDto, ToDto};
use shared_kernel::domain::value_objects::UserId;

use crate::application::get_profile::GetProfileCommand;
use crate::application::update_professional_status::{ProfessionalStatusQuery, UpdateProfessionalStatusCommand};
use crate::application::update_profile::{UpdateProfileCommand, UpdateProfileDto};
use crate::domain::entities::Actor;
use crate::domain::params::ProfilePatch;
use crate::infrastructure::api::http::ApiState;
use crate::infrastructure::api::http::mappers::{HttpError, ProfessionalStatusResponse, ProfileResponse};

/// `GET /users/{id}/profile`
pub async fn get_profile(
    State(state): State<ApiState>,
    Extension(actor): Extension<Actor>,
    Path(raw_id): Path<String>,
) -> Result<Json<ProfileResponse>, HttpError> {
    let user_id = parse_user_id(&raw_id)?;

    let profile = state.get_profile
        .execute(GetProfileCommand { actor, user_id })
        .await?;

    Ok(Json(profile.to_dto()))
}

/// `PUT /users/{id}/profile`
pub async fn update_profile(
    State(state): State<ApiState>,
    Extension(actor): Extension<Actor>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateProfileDto>, JsonRejection>,
) -> Result<Json<ProfileResponse>, HttpError> {
    let user_id = parse_user_id(&raw_id)?;

    // 1. Droits avant contenu : un étranger reçoit 403 même avec un corps invalide
    actor.ensure_can_edit_profile_of(&user_id)?;

    // 2. Validation de tous les champs du DTO
    let Json(dto) = payload?;
    let patch = ProfilePatch::from_dto(dto)?;

    // 3. Exécution
    let profile = state.update_profile
        .execute(UpdateProfileCommand { actor, user_id, patch })
        .await?;

    Ok(Json(profile.to_dto()))
}

/// `PUT /users/{id}/professional-status?status=true|false`
pub async fn update_professional_status(
    State(state): State<ApiState>,
    Extension(actor): Extension<Actor>,
    Path(raw_id): Path<String>,
    query: Result<Query<ProfessionalStatusQuery>, QueryRejection>,
) -> Result<Json<ProfessionalStatusResponse>, HttpError> {
    let user_id = parse_user_id(&raw_id)?;

    actor.ensure_can_change_professional_status()?;

    let Query(ProfessionalStatusQuery { status }) = query?;

    let profile = state.update_professional_status
        .execute(UpdateProfessionalStatusCommand { actor, user_id, status })
        .await?;

    Ok(Json(profile.to_dto()))
}

// Un identifiant mal formé est une erreur de validation (422), pas une 404
fn parse_user_id(raw: &str) -> Result<UserId, HttpError> {
    Ok(UserId::from_str(raw)?)
}
