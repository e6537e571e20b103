//! # ecocity-core
//!
//! Business rules of EcoCity: repository and gateway abstractions
//! plus the use cases that operate on them.

pub mod db;
pub mod entities;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub use repositories::Error as RepoError;
