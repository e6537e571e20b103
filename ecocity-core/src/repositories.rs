// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user_by_email(&self, email: &EmailAddress) -> Result<()>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
}

pub trait PointRepo {
    fn create_point(&self, point: &CollectionPoint) -> Result<()>;
    fn update_point(&self, point: &CollectionPoint) -> Result<()>;
    fn delete_point(&self, id: &str) -> Result<()>;

    fn get_point(&self, id: &str) -> Result<CollectionPoint>;
    fn all_points(&self) -> Result<Vec<CollectionPoint>>;
    fn count_points(&self) -> Result<usize>;
}

pub trait EventRepo {
    fn create_event(&self, event: &Event) -> Result<()>;
    fn update_event(&self, event: &Event) -> Result<()>;
    fn delete_event(&self, id: &str) -> Result<()>;

    fn get_event(&self, id: &str) -> Result<Event>;
    fn all_events_chronologically(&self) -> Result<Vec<Event>>;
    fn count_events(&self) -> Result<usize>;
}

pub trait PointRequestRepo {
    fn create_point_request(&self, request: &PointRequest) -> Result<()>;
    fn delete_point_request(&self, id: &str) -> Result<()>;

    fn get_point_request(&self, id: &str) -> Result<PointRequest>;
    fn all_point_requests(&self) -> Result<Vec<PointRequest>>;
    fn point_requests_created_by(&self, email: &EmailAddress) -> Result<Vec<PointRequest>>;

    // Conditional transition: the row is updated only while its status
    // is still pending. Returns the number of affected rows, i.e. 0 if
    // another caller has decided the request in the meantime.
    fn mark_point_request_decided(
        &self,
        id: &str,
        status: RequestStatus,
        decided_at: Timestamp,
        point_id: Option<&Id>,
    ) -> Result<usize>;
}

pub trait EventRequestRepo {
    fn create_event_request(&self, request: &EventRequest) -> Result<()>;
    fn delete_event_request(&self, id: &str) -> Result<()>;

    fn get_event_request(&self, id: &str) -> Result<EventRequest>;
    fn all_event_requests(&self) -> Result<Vec<EventRequest>>;
    fn event_requests_created_by(&self, email: &EmailAddress) -> Result<Vec<EventRequest>>;

    // See PointRequestRepo::mark_point_request_decided.
    fn mark_event_request_decided(
        &self,
        id: &str,
        status: RequestStatus,
        decided_at: Timestamp,
        event_id: Option<&Id>,
    ) -> Result<usize>;
}

pub trait UserTokenRepo {
    fn replace_user_token(&self, token: UserToken) -> Result<EmailNonce>;

    fn consume_user_token(&self, email_nonce: &EmailNonce) -> Result<UserToken>;

    fn delete_expired_user_tokens(&self, expired_before: Timestamp) -> Result<usize>;

    fn get_user_token_by_email(&self, email: &EmailAddress) -> Result<UserToken>;
}
