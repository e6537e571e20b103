use crate::entities::*;

#[derive(Debug)]
pub enum NotificationEvent<'a> {
    UserRegistered {
        user: &'a User,
        confirmation_url: &'a str,
    },
    UserEmailConfirmationRequested {
        user: &'a User,
        confirmation_url: &'a str,
    },
    UserResetPasswordRequested {
        email_nonce: &'a EmailNonce,
        reset_url: &'a str,
    },
}

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
