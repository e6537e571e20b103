use super::prelude::*;

pub fn change_user_role<D: Db>(
    db: &D,
    account_email: &EmailAddress,
    user_email: &EmailAddress,
    role: Role,
) -> Result<()> {
    log::info!("Changing role to {:?} for {}", role, user_email);
    let account = db
        .try_get_user_by_email(account_email)?
        .ok_or(Error::UserDoesNotExist)?;
    if !account.role.is_admin() {
        return Err(Error::Forbidden);
    }
    // Admins cannot touch their own role, so at least
    // one administrator account always remains.
    if account_email == user_email {
        return Err(Error::Forbidden);
    }
    let mut user = db
        .try_get_user_by_email(user_email)?
        .ok_or(Error::UserDoesNotExist)?;
    if user.role != role {
        user.role = role;
        db.update_user(&user)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn user(email: &str, role: Role) -> User {
        User {
            id: Id::new(),
            email: EmailAddress::new_unchecked(email.to_string()),
            email_confirmed: true,
            password: "secret".parse::<Password>().unwrap(),
            role,
            name: email.to_string(),
            bio: String::new(),
            photo_url: None,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn admin_promotes_user() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user("admin@eco.city", Role::Admin));
        db.users.borrow_mut().push(user("maria@example.org", Role::User));
        let admin = "admin@eco.city".parse().unwrap();
        let maria = "maria@example.org".parse().unwrap();
        assert!(change_user_role(&db, &admin, &maria, Role::Admin).is_ok());
        assert_eq!(Role::Admin, db.users.borrow()[1].role);
    }

    #[test]
    fn non_admin_cannot_change_roles() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user("maria@example.org", Role::User));
        db.users.borrow_mut().push(user("joao@example.org", Role::User));
        let maria = "maria@example.org".parse().unwrap();
        let joao = "joao@example.org".parse().unwrap();
        assert!(matches!(
            change_user_role(&db, &maria, &joao, Role::Admin),
            Err(Error::Forbidden)
        ));
        assert_eq!(Role::User, db.users.borrow()[1].role);
    }

    #[test]
    fn admin_cannot_demote_self() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user("admin@eco.city", Role::Admin));
        let admin = "admin@eco.city".parse().unwrap();
        assert!(matches!(
            change_user_role(&db, &admin, &admin, Role::User),
            Err(Error::Forbidden)
        ));
        assert_eq!(Role::Admin, db.users.borrow()[0].role);
    }
}
