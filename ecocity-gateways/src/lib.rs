#[macro_use]
extern crate log;

pub mod notify;
pub mod opencage;
pub mod sendmail;
pub mod user_communication;
