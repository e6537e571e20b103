use ecocity_core::gateways::notify::{NotificationEvent, NotificationGateway};

use super::*;

fn refresh_user_token(connections: &sqlite::Connections, user: &User) -> Result<EmailNonce> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::refresh_user_token(conn, user.email.as_str().to_owned()))?)
}

pub fn reset_password_request(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    email: &EmailAddress,
    reset_url: &str,
) -> Result<EmailNonce> {
    // The user is loaded before the following transaction that
    // requires exclusive access to the database connection for
    // writing.
    let user = connections.shared()?.get_user_by_email(email)?;
    let email_nonce = refresh_user_token(connections, &user)?;
    let url = format!("{reset_url}?token={}", email_nonce.encode_to_string());
    notify.notify(NotificationEvent::UserResetPasswordRequested {
        email_nonce: &email_nonce,
        reset_url: &url,
    });
    Ok(email_nonce)
}

pub fn reset_password_with_email_nonce(
    connections: &sqlite::Connections,
    email_nonce: EmailNonce,
    new_password: Password,
) -> Result<()> {
    // The token should be consumed only once, even if the
    // following transaction for updating the user fails!
    let token = connections.exclusive()?.transaction(|conn| {
        usecases::consume_user_token(conn, &email_nonce).map_err(|err| {
            log::warn!(
                "Missing or invalid token to reset password for user '{}': {}",
                email_nonce.email,
                err
            );
            err
        })
    })?;

    // The consumed nonce must match the request parameters
    debug_assert!(token.email_nonce == email_nonce);

    let email = EmailAddress::new_unchecked(token.email_nonce.email);
    connections.exclusive()?.transaction(|conn| {
        usecases::confirm_email_and_reset_password(conn, &email, new_password).map_err(|err| {
            warn!("Failed to reset password for e-mail ({}): {}", email, err);
            err
        })
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn should_reset_password() {
        let fixture = BackendFixture::new();
        let email: EmailAddress = "user@example.org".parse().unwrap();
        fixture.create_user("user@example.org", None);

        let new_credentials = usecases::Credentials {
            email: &email,
            password: "new password",
        };
        assert!(usecases::login_with_email(
            &fixture.db_connections.shared().unwrap(),
            &new_credentials
        )
        .is_err());

        let email_nonce = flows::reset_password_request(
            &fixture.db_connections,
            &fixture.notify,
            &email,
            "https://eco.city/reset",
        )
        .unwrap();
        assert_eq!(email.as_str(), email_nonce.email);

        assert!(flows::reset_password_with_email_nonce(
            &fixture.db_connections,
            email_nonce.clone(),
            "new password".parse::<Password>().unwrap()
        )
        .is_ok());

        // A 2nd attempt with the same token must fail.
        assert!(flows::reset_password_with_email_nonce(
            &fixture.db_connections,
            email_nonce,
            "other password".parse::<Password>().unwrap()
        )
        .is_err());

        // The new password works and the reset confirmed the e-mail.
        assert!(usecases::login_with_email(
            &fixture.db_connections.shared().unwrap(),
            &new_credentials
        )
        .is_ok());
    }
}
