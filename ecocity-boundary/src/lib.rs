use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct User {
    pub email: String,
    pub email_confirmed: bool,
    pub role: UserRole,
    pub name: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateUserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ChangeUserRole {
    pub role: UserRole,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ConfirmEmailAddress {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RequestPasswordReset {
    pub email: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ResetPassword {
    pub token: String,
    pub new_password: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CollectionPoint {
    pub id            : String,
    pub name          : String,
    pub category      : String,
    pub lat           : f64,
    pub lng           : f64,
    pub description   : String,
    pub impact        : String,
    pub address       : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by    : Option<String>,
    pub created_at    : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewCollectionPoint {
    pub name: String,
    pub category: String,
    pub address: String,
    pub description: String,
    pub impact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Event {
    pub id          : String,
    pub title       : String,
    pub description : String,
    pub date        : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time        : Option<String>,
    pub address     : String,
    pub organizer   : String,
    pub lat         : f64,
    pub lng         : f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by  : Option<String>,
    pub created_at  : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub address: String,
    pub organizer: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PointRequest {
    pub id          : String,
    pub name        : String,
    pub category    : String,
    pub address     : String,
    pub description : String,
    pub impact      : String,
    pub status      : RequestStatus,
    pub created_by  : String,
    pub created_at  : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_at  : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_id    : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewPointRequest {
    pub name: String,
    pub category: String,
    pub address: String,
    pub description: String,
    #[serde(default)]
    pub impact: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct EventRequest {
    pub id          : String,
    pub title       : String,
    pub description : String,
    pub date        : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time        : Option<String>,
    pub address     : String,
    pub organizer   : String,
    pub status      : RequestStatus,
    pub created_by  : String,
    pub created_at  : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_at  : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id    : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewEventRequest {
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub address: String,
    pub organizer: String,
}

/// JSON body of an error response.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
