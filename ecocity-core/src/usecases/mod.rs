mod approve_event_request;
mod approve_point_request;
mod authorize;
mod change_user_role;
mod confirm_email;
mod confirm_email_and_reset_password;
mod create_event_request;
mod create_new_user;
mod create_point;
mod create_point_request;
mod delete_event;
mod delete_point;
mod delete_request;
mod error;
mod filter_points;
mod login;
mod query_events;
mod query_points;
mod query_requests;
mod reject_request;
mod store_event;
mod update_event;
mod update_point;
mod update_user_profile;
mod user_tokens;


type Result<T> = std::result::Result<T, Error>;

pub use self::{
    approve_event_request::*, approve_point_request::*, authorize::*, change_user_role::*,
    confirm_email::*, confirm_email_and_reset_password::*, create_event_request::*,
    create_new_user::*, create_point::*,
    create_point_request::*, delete_event::*, delete_point::*, delete_request::*, error::Error,
    filter_points::*, login::*, query_events::*, query_points::*, query_requests::*,
    reject_request::*, store_event::*, update_event::*, update_point::*,
    update_user_profile::*, user_tokens::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}
use self::prelude::*;

pub fn get_user<R>(repo: &R, logged_in_email: &EmailAddress, requested_email: &EmailAddress) -> Result<User>
where
    R: UserRepo,
{
    if logged_in_email != requested_email {
        return Err(Error::Forbidden);
    }
    Ok(repo.get_user_by_email(requested_email)?)
}

pub fn get_point<R: PointRepo>(repo: &R, id: &str) -> Result<CollectionPoint> {
    Ok(repo.get_point(id)?)
}

pub fn get_event<R: EventRepo>(repo: &R, id: &str) -> Result<Event> {
    Ok(repo.get_event(id)?)
}

pub fn delete_user<R>(repo: &R, login_email: &EmailAddress, email: &EmailAddress) -> Result<()>
where
    R: UserRepo,
{
    if login_email != email {
        return Err(Error::Forbidden);
    }
    Ok(repo.delete_user_by_email(email)?)
}
