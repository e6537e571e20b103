// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::Error as DieselError,
};

use ecocity_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod event;
mod event_request;
mod point;
mod point_request;
mod user;
mod user_token;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_user_rowid_by_email(conn: &mut SqliteConnection, email: &str) -> Result<i64> {
    use schema::users::dsl;
    schema::users::table
        .select(dsl::id)
        .filter(dsl::email.eq(email))
        .first::<i64>(conn)
        .map_err(|err| {
            log::warn!("Failed to resolve user by email '{email}': {err}");
            err
        })
        .map_err(from_diesel_err)
}

fn load_role(role: RolePrimitive) -> Role {
    Role::try_from(role).unwrap_or_else(|err| {
        log::warn!("{err}, falling back to default role");
        Role::default()
    })
}

fn load_category(category: PointCategoryPrimitive) -> Result<PointCategory> {
    PointCategory::try_from(category).map_err(|err| anyhow!(err).into())
}

fn load_request_status(status: RequestStatusPrimitive) -> Result<RequestStatus> {
    RequestStatus::try_from(status).map_err(|err| anyhow!(err).into())
}

fn load_pos(lat: f64, lng: f64) -> Result<MapPoint> {
    MapPoint::try_from_lat_lng_deg(lat, lng).map_err(|err| anyhow!(err).into())
}

fn load_date(date: &str) -> Result<Date> {
    parse_date(date).map_err(|err| anyhow!(err).into())
}

fn load_time(time: Option<&str>) -> Result<Option<Time>> {
    time.map(parse_time)
        .transpose()
        .map_err(|err| anyhow!(err).into())
}

fn load_user(user: models::UserEntity) -> User {
    let models::UserEntity {
        id: _,
        uid,
        email,
        email_confirmed,
        password,
        role,
        name,
        bio,
        photo_url,
        created_at,
    } = user;
    User {
        id: uid.into(),
        email: EmailAddress::new_unchecked(email),
        email_confirmed,
        password: Password::from_hash(password),
        role: load_role(role),
        name,
        bio,
        photo_url,
        created_at: Timestamp::from_milliseconds(created_at),
    }
}

fn load_point(point: models::PointEntity) -> Result<CollectionPoint> {
    let models::PointEntity {
        id: _,
        uid,
        name,
        category,
        lat,
        lng,
        description,
        impact,
        address,
        opening_hours,
        contact,
        website,
        created_by,
        created_at,
    } = point;
    Ok(CollectionPoint {
        id: uid.into(),
        name,
        category: load_category(category)?,
        pos: load_pos(lat, lng)?,
        description,
        impact,
        address,
        opening_hours,
        contact,
        website,
        created_by: created_by.map(EmailAddress::new_unchecked),
        created_at: Timestamp::from_milliseconds(created_at),
    })
}

fn load_event(event: models::EventEntity) -> Result<Event> {
    let models::EventEntity {
        id: _,
        uid,
        title,
        description,
        date,
        time,
        address,
        organizer,
        lat,
        lng,
        created_by,
        created_at,
    } = event;
    Ok(Event {
        id: uid.into(),
        title,
        description,
        date: load_date(&date)?,
        time: load_time(time.as_deref())?,
        address,
        organizer,
        pos: load_pos(lat, lng)?,
        created_by: created_by.map(EmailAddress::new_unchecked),
        created_at: Timestamp::from_milliseconds(created_at),
    })
}

fn load_point_request(request: models::PointRequestEntity) -> Result<PointRequest> {
    let models::PointRequestEntity {
        id: _,
        uid,
        name,
        category,
        address,
        description,
        impact,
        status,
        created_by,
        created_at,
        decided_at,
        point_uid,
    } = request;
    Ok(PointRequest {
        id: uid.into(),
        name,
        category: load_category(category)?,
        address,
        description,
        impact,
        status: load_request_status(status)?,
        created_by: EmailAddress::new_unchecked(created_by),
        created_at: Timestamp::from_milliseconds(created_at),
        decided_at: decided_at.map(Timestamp::from_milliseconds),
        point_id: point_uid.map(Into::into),
    })
}

fn load_event_request(request: models::EventRequestEntity) -> Result<EventRequest> {
    let models::EventRequestEntity {
        id: _,
        uid,
        title,
        description,
        date,
        time,
        address,
        organizer,
        status,
        created_by,
        created_at,
        decided_at,
        event_uid,
    } = request;
    Ok(EventRequest {
        id: uid.into(),
        title,
        description,
        date: load_date(&date)?,
        time: load_time(time.as_deref())?,
        address,
        organizer,
        status: load_request_status(status)?,
        created_by: EmailAddress::new_unchecked(created_by),
        created_at: Timestamp::from_milliseconds(created_at),
        decided_at: decided_at.map(Timestamp::from_milliseconds),
        event_id: event_uid.map(Into::into),
    })
}
