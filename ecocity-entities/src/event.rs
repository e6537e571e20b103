use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description};

pub use time::{Date, Time};

use crate::{email::EmailAddress, geo::MapPoint, id::Id, time::Timestamp};

pub const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
pub const TIME_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]");

#[derive(Debug, Error)]
#[error("Invalid date: {0}")]
pub struct DateParseError(String);

#[derive(Debug, Error)]
#[error("Invalid time of day: {0}")]
pub struct TimeParseError(String);

pub fn parse_date(s: &str) -> Result<Date, DateParseError> {
    Date::parse(s.trim(), DATE_FORMAT).map_err(|_| DateParseError(s.to_owned()))
}

pub fn parse_time(s: &str) -> Result<Time, TimeParseError> {
    Time::parse(s.trim(), TIME_FORMAT).map_err(|_| TimeParseError(s.to_owned()))
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).expect("formatted date")
}

pub fn format_time(time: Time) -> String {
    time.format(TIME_FORMAT).expect("formatted time of day")
}

/// A published community event, visible to all users.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id          : Id,
    pub title       : String,
    pub description : String,
    pub date        : Date,
    pub time        : Option<Time>,
    pub address     : String,
    pub organizer   : String,
    pub pos         : MapPoint,
    pub created_by  : Option<EmailAddress>,
    pub created_at  : Timestamp,
}

impl Event {
    pub fn strip_creator_details(self) -> Self {
        Self {
            created_by: None,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_date() {
        let date = parse_date("2026-04-22").unwrap();
        assert_eq!("2026-04-22", format_date(date));
        assert!(parse_date("22/04/2026").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn parse_and_format_time() {
        let time = parse_time("14:30").unwrap();
        assert_eq!("14:30", format_time(time));
        assert!(parse_time("25:00").is_err());
    }

    #[test]
    fn parse_trims_whitespace() {
        assert!(parse_date(" 2026-04-22 ").is_ok());
        assert!(parse_time(" 09:00 ").is_ok());
    }
}
