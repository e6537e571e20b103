use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_email(login.email)
        .map_err(Error::Repo)
        .and_then(|user| {
            if let Some(u) = user {
                if u.password.verify(login.password) {
                    if u.email_confirmed {
                        Ok(u)
                    } else {
                        Err(Error::EmailNotConfirmed)
                    }
                } else {
                    Err(Error::Credentials)
                }
            } else {
                Err(Error::Credentials)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn user(email: &str, password: &str, confirmed: bool) -> User {
        User {
            id: Id::new(),
            email: EmailAddress::new_unchecked(email.to_string()),
            email_confirmed: confirmed,
            password: password.parse::<Password>().unwrap(),
            role: Role::User,
            name: "Maria".to_string(),
            bio: String::new(),
            photo_url: None,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn login_with_valid_credentials() {
        let db = MockDb::default();
        db.users
            .borrow_mut()
            .push(user("maria@example.org", "secret", true));
        let login = Credentials {
            email: &"maria@example.org".parse().unwrap(),
            password: "secret",
        };
        let logged_in = login_with_email(&db, &login).unwrap();
        assert_eq!("maria@example.org", logged_in.email.as_str());
    }

    #[test]
    fn login_with_wrong_password() {
        let db = MockDb::default();
        db.users
            .borrow_mut()
            .push(user("maria@example.org", "secret", true));
        let login = Credentials {
            email: &"maria@example.org".parse().unwrap(),
            password: "wrong pass",
        };
        assert!(matches!(
            login_with_email(&db, &login),
            Err(Error::Credentials)
        ));
    }

    #[test]
    fn login_with_unknown_email() {
        let db = MockDb::default();
        let login = Credentials {
            email: &"nobody@example.org".parse().unwrap(),
            password: "secret",
        };
        assert!(matches!(
            login_with_email(&db, &login),
            Err(Error::Credentials)
        ));
    }

    #[test]
    fn login_with_unconfirmed_email() {
        let db = MockDb::default();
        db.users
            .borrow_mut()
            .push(user("maria@example.org", "secret", false));
        let login = Credentials {
            email: &"maria@example.org".parse().unwrap(),
            password: "secret",
        };
        assert!(matches!(
            login_with_email(&db, &login),
            Err(Error::EmailNotConfirmed)
        ));
    }
}
