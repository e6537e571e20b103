#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # ecocity-entities
//!
//! Reusable, agnostic domain entities for EcoCity.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod category;
pub mod email;
pub mod event;
pub mod geo;
pub mod id;
pub mod nonce;
pub mod password;
pub mod point;
pub mod request;
pub mod time;
pub mod user;
