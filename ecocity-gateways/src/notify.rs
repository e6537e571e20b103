use std::sync::Arc;

use ecocity_core::gateways::{
    email::EmailGateway,
    notify::{NotificationEvent, NotificationGateway},
};
use ecocity_entities::email::*;

use crate::user_communication;

/// Turns notification events into e-mails.
#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
}

impl Notify {
    pub fn new<G>(gw: G) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
        }
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        match event {
            E::UserRegistered {
                user,
                confirmation_url,
            } => {
                let content =
                    user_communication::user_registration_email(&user.name, confirmation_url);
                info!("Sending registration confirmation e-mail to user {}", user.email);
                self.email_gw
                    .compose_and_send(&[user.email.clone()], &content);
            }
            E::UserEmailConfirmationRequested {
                user,
                confirmation_url,
            } => {
                let content = user_communication::email_confirmation_email(confirmation_url);
                info!("Sending confirmation e-mail to user {}", user.email);
                self.email_gw
                    .compose_and_send(&[user.email.clone()], &content);
            }
            E::UserResetPasswordRequested {
                email_nonce,
                reset_url,
            } => {
                let content = user_communication::user_reset_password_email(reset_url);
                info!(
                    "Sending e-mail to {} after password reset requested",
                    email_nonce.email
                );
                self.email_gw.compose_and_send(
                    &[EmailAddress::new_unchecked(email_nonce.email.clone())],
                    &content,
                );
            }
        }
    }
}
