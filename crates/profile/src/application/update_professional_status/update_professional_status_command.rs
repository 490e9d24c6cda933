// crates/profile/src/application/update_professional_status/update_professional_status_command.rs

use serde::Deserialize;
use shared_kernel::domain::value_objects::UserId;
use crate::domain::entities::Actor;

#[derive(Debug, Clone)]
pub struct UpdateProfessionalStatusCommand {
    pub actor: Actor,
    pub user_id: UserId,
    pub status: bool,
}

/// Paramètres de requête de `PUT /users/{id}/professional-status?status=true|false`
#[derive(Debug, Clone, Deserialize)]
pub struct ProfessionalStatusQuery {
    pub status: bool,
}
