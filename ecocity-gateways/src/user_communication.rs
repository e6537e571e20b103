use askama::Template;
use ecocity_entities::email::EmailContent;

#[derive(Template)]
#[template(path = "email_user_registration/subject_EN.txt")]
struct EmailUserRegistrationSubjectTemplate;

#[derive(Template)]
#[template(path = "email_user_registration/body_EN.txt")]
struct EmailUserRegistrationBodyTemplate<'a> {
    name: &'a str,
    url: &'a str,
}

pub fn user_registration_email(name: &str, url: &str) -> EmailContent {
    let subject = EmailUserRegistrationSubjectTemplate.render().unwrap();
    let body = EmailUserRegistrationBodyTemplate { name, url }
        .render()
        .unwrap();
    EmailContent { subject, body }
}

#[derive(Template)]
#[template(path = "email_confirmation/subject_EN.txt")]
struct EmailConfirmationSubjectTemplate;

#[derive(Template)]
#[template(path = "email_confirmation/body_EN.txt")]
struct EmailConfirmationBodyTemplate<'a> {
    url: &'a str,
}

pub fn email_confirmation_email(url: &str) -> EmailContent {
    let subject = EmailConfirmationSubjectTemplate.render().unwrap();
    let body = EmailConfirmationBodyTemplate { url }.render().unwrap();
    EmailContent { subject, body }
}

#[derive(Template)]
#[template(path = "email_reset_password/subject_EN.txt")]
struct EmailUserResetPasswordSubjectTemplate;

#[derive(Template)]
#[template(path = "email_reset_password/body_EN.txt")]
struct EmailUserResetPasswordBodyTemplate<'a> {
    url: &'a str,
}

pub fn user_reset_password_email(url: &str) -> EmailContent {
    let subject = EmailUserResetPasswordSubjectTemplate.render().unwrap();
    let body = EmailUserResetPasswordBodyTemplate { url }.render().unwrap();
    EmailContent { subject, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_email_contains_name_and_url() {
        let email = user_registration_email("Maria", "https://eco.city/confirm-email/abc123");
        assert!(email.body.contains("Maria"));
        assert!(email.body.contains("https://eco.city/confirm-email/abc123"));
        assert!(!email.subject.is_empty());
    }

    #[test]
    fn reset_password_email_contains_url() {
        let email = user_reset_password_email("https://eco.city/reset-password?token=xyz");
        assert!(email
            .body
            .contains("https://eco.city/reset-password?token=xyz"));
    }
}
