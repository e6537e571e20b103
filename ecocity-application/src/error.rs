use ecocity_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use std::io;
use thiserror::Error;

pub use ecocity_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ecocity_core::usecases::Error> for AppError {
    fn from(err: ecocity_core::usecases::Error) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<ecocity_entities::password::ParseError> for AppError {
    fn from(err: ecocity_entities::password::ParseError) -> Self {
        BError::from(err).into()
    }
}

impl From<ecocity_entities::nonce::EmailNonceDecodingError> for AppError {
    fn from(err: ecocity_entities::nonce::EmailNonceDecodingError) -> Self {
        BError::from(err).into()
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}

impl From<ecocity_entities::password::ParseError> for BError {
    fn from(_: ecocity_entities::password::ParseError) -> Self {
        Self::Parameter(ParameterError::Password)
    }
}

impl From<ecocity_entities::nonce::EmailNonceDecodingError> for BError {
    fn from(_: ecocity_entities::nonce::EmailNonceDecodingError) -> Self {
        Self::Parameter(ParameterError::InvalidNonce)
    }
}
