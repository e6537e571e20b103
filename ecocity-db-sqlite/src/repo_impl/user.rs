use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn delete_user_by_email(&self, _email: &EmailAddress) -> Result<()> {
        unreachable!();
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }
    fn delete_user_by_email(&self, email: &EmailAddress) -> Result<()> {
        delete_user_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }
    fn delete_user_by_email(&self, email: &EmailAddress) -> Result<()> {
        delete_user_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

fn as_new_user(u: &User) -> models::NewUser {
    models::NewUser {
        uid: u.id.as_str(),
        email: u.email.as_str(),
        email_confirmed: u.email_confirmed,
        password: u.password.as_ref(),
        role: u.role.into(),
        name: &u.name,
        bio: &u.bio,
        photo_url: u.photo_url.as_deref(),
        created_at: u.created_at.as_milliseconds(),
    }
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    let new_user = as_new_user(u);
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let new_user = as_new_user(u);
    diesel::update(dsl::users.filter(dsl::email.eq(new_user.email)))
        .set(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<()> {
    use schema::users::dsl;
    diesel::delete(dsl::users.filter(dsl::email.eq(email.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<User> {
    use schema::users::dsl;
    Ok(load_user(
        dsl::users
            .filter(dsl::email.eq(email.as_str()))
            .first::<models::UserEntity>(conn)
            .map_err(from_diesel_err)?,
    ))
}

fn try_get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user))
}

fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_user)
        .collect())
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
