use core::ops::Deref;

use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
};

use ecocity_application::error::AppError;
use ecocity_core::{
    db::Db,
    gateways::{geocode::GeoCodingGateway, notify::NotificationGateway},
    usecases,
    usecases::Error as ParameterError,
};
use ecocity_entities::{email::EmailAddress, user::*};

pub const COOKIE_EMAIL_KEY: &str = "ecocity-user-email";

type Result<T> = std::result::Result<T, AppError>;

/// The session, if any, attached to the incoming request.
#[derive(Debug)]
pub struct Auth {
    account_email: Option<EmailAddress>,
}

impl Auth {
    pub fn account_email(&self) -> Result<&EmailAddress> {
        self.account_email
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn user_with_min_role(&self, db: &dyn Db, min_required_role: Role) -> Result<User> {
        Ok(usecases::authorize_user_by_email(
            db,
            self.account_email()?,
            min_required_role,
        )?)
    }

    fn account_email_from_cookie(request: &Request) -> Option<EmailAddress> {
        request
            .cookies()
            .get_private(COOKIE_EMAIL_KEY)
            .and_then(|cookie| cookie.value().parse().ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let account_email = Self::account_email_from_cookie(request);
        Outcome::Success(Self { account_email })
    }
}

/// A guard that only lets logged-in users pass.
#[derive(Debug)]
pub struct Account(EmailAddress);

impl Account {
    pub fn email(&self) -> &EmailAddress {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_email() {
            Ok(email) => Outcome::Success(Account(email.clone())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct GeoCoding(pub Box<dyn GeoCodingGateway + Send + Sync>);

pub struct Notify(pub Box<dyn NotificationGateway + Send + Sync>);

impl Deref for Notify {
    type Target = dyn NotificationGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
