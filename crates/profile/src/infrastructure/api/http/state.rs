// crates/profile/src/infrastructure/api/http/state.rs

use std::sync::Arc;
use crate::application::get_profile::GetProfileUseCase;
use crate::application::update_professional_status::UpdateProfessionalStatusUseCase;
use crate::application::update_profile::UpdateProfileUseCase;
use crate::domain::repositories::SessionRepository;

/// Dépendances partagées par les handlers HTTP
#[derive(Clone)]
pub struct ApiState {
    pub sessions: Arc<dyn SessionRepository>,
    pub get_profile: Arc<GetProfileUseCase>,
    pub update_profile: Arc<UpdateProfileUseCase>,
    pub update_professional_status: Arc<UpdateProfessionalStatusUseCase>,
}
