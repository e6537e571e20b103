// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub uid: &'a str,
    pub email: &'a str,
    pub email_confirmed: bool,
    pub password: &'a str,
    pub role: i16,
    pub name: &'a str,
    pub bio: &'a str,
    pub photo_url: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub uid: String,
    pub email: String,
    pub email_confirmed: bool,
    pub password: String,
    pub role: i16,
    pub name: String,
    pub bio: String,
    pub photo_url: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = user_tokens)]
pub struct NewUserToken {
    pub user_id: i64,
    pub nonce: String,
    pub expires_at: i64,
}

#[derive(Queryable)]
pub struct UserTokenEntity {
    pub user_id: i64,
    pub nonce: String,
    pub expires_at: i64,
    // Joined columns
    pub user_email: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = points)]
pub struct NewPoint<'a> {
    pub uid: &'a str,
    pub name: &'a str,
    pub category: i16,
    pub lat: f64,
    pub lng: f64,
    pub description: &'a str,
    pub impact: &'a str,
    pub address: &'a str,
    pub opening_hours: Option<&'a str>,
    pub contact: Option<&'a str>,
    pub website: Option<&'a str>,
    pub created_by: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct PointEntity {
    pub id: i64,
    pub uid: String,
    pub name: String,
    pub category: i16,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
    pub impact: String,
    pub address: String,
    pub opening_hours: Option<String>,
    pub contact: Option<String>,
    pub website: Option<String>,
    pub created_by: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = events)]
pub struct NewEvent<'a> {
    pub uid: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub date: String,
    pub time: Option<String>,
    pub address: &'a str,
    pub organizer: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub created_by: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct EventEntity {
    pub id: i64,
    pub uid: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: Option<String>,
    pub address: String,
    pub organizer: String,
    pub lat: f64,
    pub lng: f64,
    pub created_by: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = point_requests)]
pub struct NewPointRequest<'a> {
    pub uid: &'a str,
    pub name: &'a str,
    pub category: i16,
    pub address: &'a str,
    pub description: &'a str,
    pub impact: &'a str,
    pub status: i16,
    pub created_by: &'a str,
    pub created_at: i64,
    pub decided_at: Option<i64>,
    pub point_uid: Option<&'a str>,
}

#[derive(Queryable)]
pub struct PointRequestEntity {
    pub id: i64,
    pub uid: String,
    pub name: String,
    pub category: i16,
    pub address: String,
    pub description: String,
    pub impact: String,
    pub status: i16,
    pub created_by: String,
    pub created_at: i64,
    pub decided_at: Option<i64>,
    pub point_uid: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = event_requests)]
pub struct NewEventRequest<'a> {
    pub uid: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub date: String,
    pub time: Option<String>,
    pub address: &'a str,
    pub organizer: &'a str,
    pub status: i16,
    pub created_by: &'a str,
    pub created_at: i64,
    pub decided_at: Option<i64>,
    pub event_uid: Option<&'a str>,
}

#[derive(Queryable)]
pub struct EventRequestEntity {
    pub id: i64,
    pub uid: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: Option<String>,
    pub address: String,
    pub organizer: String,
    pub status: i16,
    pub created_by: String,
    pub created_at: i64,
    pub decided_at: Option<i64>,
    pub event_uid: Option<String>,
}
