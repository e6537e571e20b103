use super::prelude::*;

pub fn confirm_email_and_reset_password<R: UserRepo>(
    repo: &R,
    email: &EmailAddress,
    new_password: Password,
) -> Result<()> {
    let mut user = repo.get_user_by_email(email)?;
    log::info!("Resetting password for user {email}");
    // Requesting a password reset proves ownership of the mailbox.
    user.email_confirmed = true;
    user.password = new_password;
    repo.update_user(&user)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn reset_password_confirms_email() {
        let db = MockDb::default();
        db.users.borrow_mut().push(User {
            id: Id::new(),
            email: EmailAddress::new_unchecked("maria@example.org".to_string()),
            email_confirmed: false,
            password: "old secret".parse::<Password>().unwrap(),
            role: Role::User,
            name: "Maria".to_string(),
            bio: String::new(),
            photo_url: None,
            created_at: Timestamp::now(),
        });
        let email = "maria@example.org".parse().unwrap();
        let new_password = "new secret".parse::<Password>().unwrap();
        assert!(confirm_email_and_reset_password(&db, &email, new_password).is_ok());
        let user = &db.users.borrow()[0];
        assert!(user.email_confirmed);
        assert!(user.password.verify("new secret"));
    }
}
