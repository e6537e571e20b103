use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{EnumIter, EnumString};
use thiserror::Error;
use time::{Date, Time};

use crate::{category::PointCategory, email::EmailAddress, id::Id, time::Timestamp};

pub type RequestStatusPrimitive = i16;

/// Disposition of a citizen request.
///
/// `Pending` is the initial state. `Approved` and `Rejected` are terminal:
/// the only remaining operation on a decided request is deletion.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RequestStatus {
    Pending  = 0,
    Approved = 1,
    Rejected = 2,
}

impl RequestStatus {
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

#[derive(Debug, Error)]
#[error("Invalid request status primitive: {0}")]
pub struct InvalidRequestStatusPrimitive(RequestStatusPrimitive);

impl TryFrom<RequestStatusPrimitive> for RequestStatus {
    type Error = InvalidRequestStatusPrimitive;
    fn try_from(from: RequestStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidRequestStatusPrimitive(from))
    }
}

impl From<RequestStatus> for RequestStatusPrimitive {
    fn from(from: RequestStatus) -> Self {
        from.to_i16().expect("Request status primitive")
    }
}

/// A citizen proposal for a new collection point.
///
/// `point_id` links to the published point spawned on approval. The link is
/// written in the same transaction as the status transition, which makes a
/// half-completed approval impossible to commit and easy to detect.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct PointRequest {
    pub id          : Id,
    pub name        : String,
    pub category    : PointCategory,
    pub address     : String,
    pub description : String,
    pub impact      : String,
    pub status      : RequestStatus,
    pub created_by  : EmailAddress,
    pub created_at  : Timestamp,
    pub decided_at  : Option<Timestamp>,
    pub point_id    : Option<Id>,
}

/// A citizen proposal for a new community event.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct EventRequest {
    pub id          : Id,
    pub title       : String,
    pub description : String,
    pub date        : Date,
    pub time        : Option<Time>,
    pub address     : String,
    pub organizer   : String,
    pub status      : RequestStatus,
    pub created_by  : EmailAddress,
    pub created_at  : Timestamp,
    pub decided_at  : Option<Timestamp>,
    pub event_id    : Option<Id>,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn status_from_str() {
        assert_eq!(RequestStatus::Pending, "pending".parse().unwrap());
        assert_eq!(RequestStatus::Approved, "Approved".parse().unwrap());
        assert_eq!(RequestStatus::Rejected, "rejected".parse().unwrap());
        assert!("reopened".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn status_primitive_round_trip() {
        for status in RequestStatus::iter() {
            let primitive = RequestStatusPrimitive::from(status);
            assert_eq!(status, RequestStatus::try_from(primitive).unwrap());
        }
        assert!(RequestStatus::try_from(-1).is_err());
    }

    #[test]
    fn only_pending_is_undecided() {
        assert!(!RequestStatus::Pending.is_decided());
        assert!(RequestStatus::Approved.is_decided());
        assert!(RequestStatus::Rejected.is_decided());
    }
}
