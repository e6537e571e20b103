use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password: String,
    pub name: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<()> {
    let password = u.password.parse::<Password>()?;
    if !validate::is_valid_email(u.email.as_str()) {
        return Err(Error::EmailAddress);
    }
    if !validate::is_non_blank(&u.name) {
        return Err(Error::Name);
    }
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        id: Id::new(),
        email: u.email,
        email_confirmed: false,
        password,
        role: Role::User,
        name: u.name.trim().to_string(),
        bio: String::new(),
        photo_url: None,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)?;
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::{
        super::{tests::MockDb, *},
        *,
    };

    fn new_user(email: &str, password: &str) -> NewUser {
        NewUser {
            email: EmailAddress::new_unchecked(email.to_string()),
            password: password.into(),
            name: "Maria".into(),
        }
    }

    #[test]
    fn create_two_users() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo@bar.de", "secret1")).is_ok());
        assert!(db
            .get_user_by_email(&EmailAddress::new_unchecked("foo@bar.de".to_string()))
            .is_ok());
        assert!(db
            .try_get_user_by_email(&EmailAddress::new_unchecked("baz@bar.de".to_string()))
            .unwrap()
            .is_none());

        assert!(create_new_user(&db, new_user("baz@bar.de", "secret2")).is_ok());
        assert!(db
            .get_user_by_email(&EmailAddress::new_unchecked("foo@bar.de".to_string()))
            .is_ok());
        assert!(db
            .get_user_by_email(&EmailAddress::new_unchecked("baz@bar.de".to_string()))
            .is_ok());
    }

    #[test]
    fn create_user_with_invalid_password() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo@baz.io", "short")).is_err());
        assert!(create_new_user(&db, new_user("foo@baz.io", "valid pass")).is_ok());
    }

    #[test]
    fn create_user_with_invalid_email() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("", "secret")).is_err());
        assert!(create_new_user(&db, new_user("fooo@", "secret")).is_err());
        assert!(create_new_user(&db, new_user("fooo@bar.io", "secret")).is_ok());
    }

    #[test]
    fn create_user_with_blank_name() {
        let db = MockDb::default();
        let mut u = new_user("foo@bar.io", "secret");
        u.name = "   ".into();
        assert!(matches!(create_new_user(&db, u), Err(Error::Name)));
    }

    #[test]
    fn create_user_with_existing_email() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("baz@foo.bar", "secret")).is_ok());
        match create_new_user(&db, new_user("baz@foo.bar", "secret")).err().unwrap() {
            Error::UserExists => {
                // ok
            }
            _ => panic!("invalid error"),
        }
    }

    #[test]
    fn email_unconfirmed_on_default() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo@bar.io", "secret")).is_ok());
        assert!(!db.users.borrow()[0].email_confirmed);
        assert_eq!(Role::User, db.users.borrow()[0].role);
    }

    #[test]
    fn encrypt_user_password() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo@bar.io", "secret")).is_ok());
        assert!(db.users.borrow()[0].password.as_ref() != "secret");
        assert!(db.users.borrow()[0].password.verify("secret"));
    }
}
