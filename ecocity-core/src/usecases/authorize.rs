use super::prelude::*;

pub fn authorize_user_by_email(
    db: &dyn Db,
    email: &EmailAddress,
    min_required_role: Role,
) -> Result<User> {
    if let Some(user) = db.try_get_user_by_email(email)? {
        if user.role >= min_required_role {
            return Ok(user);
        }
        // The account is known but lacks the required role.
        return Err(Error::Forbidden);
    }
    Err(Error::Unauthorized)
}
