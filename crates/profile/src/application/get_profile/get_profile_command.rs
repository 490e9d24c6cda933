// crates/profile/src/application/get_profile/get_profile_command.rs

use shared_kernel::domain::value_objects::UserId;
use crate::domain::entities::Actor;

#[derive(Debug, Clone)]
pub struct GetProfileCommand {
    pub actor: Actor,
    pub user_id: UserId,
}
