use super::prelude::*;

pub fn confirm_email_address<R>(repo: &R, token: &str) -> Result<()>
where
    R: UserRepo,
{
    let email_nonce = EmailNonce::decode_from_str(token).map_err(|_| Error::TokenInvalid)?;
    let email = EmailAddress::new_unchecked(email_nonce.email);
    let mut user = repo.get_user_by_email(&email)?;
    if !user.email_confirmed {
        user.email_confirmed = true;
        repo.update_user(&user)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn confirm_email_of_existing_user() {
        let db = MockDb::default();
        let email = "a@foo.bar";
        db.users.borrow_mut().push(User {
            id: Id::new(),
            email: EmailAddress::new_unchecked(email.to_string()),
            email_confirmed: false,
            password: "secret".parse::<Password>().unwrap(),
            role: Role::User,
            name: "A".to_string(),
            bio: String::new(),
            photo_url: None,
            created_at: Timestamp::now(),
        });
        let email_nonce = EmailNonce {
            email: email.into(),
            nonce: Nonce::new(),
        };
        assert!(confirm_email_address(&db, &email_nonce.encode_to_string()).is_ok());
        assert!(db.users.borrow()[0].email_confirmed);
    }

    #[test]
    fn confirm_email_with_garbage_token() {
        let db = MockDb::default();
        assert!(matches!(
            confirm_email_address(&db, "not a token"),
            Err(Error::TokenInvalid)
        ));
    }
}
