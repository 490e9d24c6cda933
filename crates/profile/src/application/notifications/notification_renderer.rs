// crates/profile/src/application/notifications/notification_renderer.rs

use minijinja::{context, Environment};
use shared_kernel::errors::{AppError, AppResult};

use crate::application::notifications::{EmailMessage, NotificationKind};
use crate::domain::value_objects::{Email, ProfileField};

// Gabarits : (kind, sujet, corps)
const TEMPLATES: &[(NotificationKind, &str, &str)] = &[
    (
        NotificationKind::ProfileUpdated,
        "Your profile has been updated",
        "Hello {{ name }},\n\n\
         The following fields of your profile were updated: {{ fields | join(\", \") }}.\n\n\
         If you did not make this change, please contact support.",
    ),
    (
        NotificationKind::ProfessionalStatusUpgraded,
        "Your account has been upgraded to professional status",
        "Hello {{ name }},\n\n\
         Congratulations! Your account has been upgraded to professional status.",
    ),
    (
        NotificationKind::ProfessionalStatusRevoked,
        "Your professional status has been removed",
        "Hello {{ name }},\n\n\
         Your account no longer has professional status.\n\n\
         If you believe this is a mistake, please contact support.",
    ),
];

/// Rendu des emails de notification à partir des gabarits minijinja.
pub struct NotificationRenderer {
    env: Environment<'static>,
}

impl NotificationRenderer {
    pub fn new() -> AppResult<Self> {
        let mut env = Environment::new();

        for (kind, subject, body) in TEMPLATES {
            let (subject_name, body_name) = kind.template_names();
            env.add_template(subject_name, *subject)
                .map_err(|e| AppError::infrastructure(format!("Invalid template {subject_name}: {e}")))?;
            env.add_template(body_name, *body)
                .map_err(|e| AppError::infrastructure(format!("Invalid template {body_name}: {e}")))?;
        }

        Ok(Self { env })
    }

    pub fn render(
        &self,
        kind: NotificationKind,
        to: Email,
        first_name: Option<&str>,
        changed_fields: Vec<ProfileField>,
    ) -> AppResult<EmailMessage> {
        let fields: Vec<&str> = changed_fields.iter().map(ProfileField::as_str).collect();
        let ctx = context! {
            name => first_name.unwrap_or("there"),
            fields => fields,
        };

        let (subject_name, body_name) = kind.template_names();
        let subject = self.render_template(subject_name, &ctx)?;
        let body = self.render_template(body_name, &ctx)?;

        Ok(EmailMessage { to, kind, subject, body, changed_fields })
    }

    fn render_template(&self, name: &str, ctx: &minijinja::Value) -> AppResult<String> {
        self.env
            .get_template(name)
            .and_then(|t| t.render(ctx))
            .map_err(|e| AppError::infrastructure(format!("Failed to render {name}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to() -> Email {
        Email::try_new("dave@example.com").unwrap()
    }

    #[test]
    fn test_profile_updated_lists_changed_fields() {
        let renderer = NotificationRenderer::new().unwrap();
        let msg = renderer
            .render(
                NotificationKind::ProfileUpdated,
                to(),
                Some("Dave"),
                vec![ProfileField::FirstName, ProfileField::Bio],
            )
            .unwrap();

        assert_eq!(msg.subject, "Your profile has been updated");
        assert!(msg.body.starts_with("Hello Dave,"));
        assert!(msg.body.contains("first_name, bio"));
        assert_eq!(msg.changed_field_names(), vec!["first_name", "bio"]);
    }

    #[test]
    fn test_upgrade_wording() {
        let renderer = NotificationRenderer::new().unwrap();
        let msg = renderer
            .render(NotificationKind::ProfessionalStatusUpgraded, to(), None, vec![])
            .unwrap();

        assert!(msg.subject.contains("upgraded"));
        assert!(msg.body.contains("upgraded to professional status"));
        assert!(msg.body.starts_with("Hello there,"));
    }

    #[test]
    fn test_names_are_not_escaped_as_html() {
        let renderer = NotificationRenderer::new().unwrap();
        let msg = renderer
            .render(NotificationKind::ProfessionalStatusRevoked, to(), Some("O'Brien"), vec![])
            .unwrap();

        assert!(msg.body.contains("O'Brien"));
    }
}
