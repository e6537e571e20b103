use crate::entities::{EmailAddress, EmailContent};

pub trait EmailGateway {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent);
}
