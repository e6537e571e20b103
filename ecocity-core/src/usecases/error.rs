use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("The title is invalid")]
    Title,
    #[error("The address is invalid")]
    Address,
    #[error("The description is invalid")]
    Description,
    #[error("The organizer is invalid")]
    Organizer,
    #[error("Invalid category")]
    Category,
    #[error("Invalid date")]
    Date,
    #[error("Invalid time of day")]
    TimeOfDay,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Invalid credentials")]
    Credentials,
    #[error("Email not confirmed")]
    EmailNotConfirmed,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("The address could not be resolved to coordinates")]
    Geocode,
    #[error("The request has already been decided")]
    RequestAlreadyDecided,
    #[error("Token invalid")]
    TokenInvalid,
    #[error("Token expired")]
    TokenExpired,
    #[error("Invalid nonce")]
    InvalidNonce,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ecocity_entities::password::ParseError> for Error {
    fn from(_: ecocity_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<ecocity_entities::email::EmailAddressParseError> for Error {
    fn from(_: ecocity_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<ecocity_entities::event::DateParseError> for Error {
    fn from(_: ecocity_entities::event::DateParseError) -> Self {
        Self::Date
    }
}

impl From<ecocity_entities::event::TimeParseError> for Error {
    fn from(_: ecocity_entities::event::TimeParseError) -> Self {
        Self::TimeOfDay
    }
}

impl From<ecocity_entities::geo::InvalidMapPoint> for Error {
    fn from(_: ecocity_entities::geo::InvalidMapPoint) -> Self {
        Self::InvalidPosition
    }
}

impl From<ecocity_entities::nonce::EmailNonceDecodingError> for Error {
    fn from(_: ecocity_entities::nonce::EmailNonceDecodingError) -> Self {
        Self::InvalidNonce
    }
}
