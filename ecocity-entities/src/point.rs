use crate::{category::PointCategory, email::EmailAddress, geo::MapPoint, id::Id, time::Timestamp};

/// A published collection point, visible to all users on the map.
///
/// Coordinates are always produced by geocoding or entered by an
/// administrator, never copied from an unreviewed request payload.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionPoint {
    pub id            : Id,
    pub name          : String,
    pub category      : PointCategory,
    pub pos           : MapPoint,
    pub description   : String,
    pub impact        : String,
    pub address       : String,
    pub opening_hours : Option<String>,
    pub contact       : Option<String>,
    pub website       : Option<String>,
    pub created_by    : Option<EmailAddress>,
    pub created_at    : Timestamp,
}

impl CollectionPoint {
    /// Hide the creator before handing the point to anonymous readers.
    pub fn strip_creator_details(self) -> Self {
        Self {
            created_by: None,
            ..self
        }
    }
}
