use super::*;
use ecocity_entities as e;

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            User => UserRole::User,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::User => User,
            UserRole::Admin => Admin,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id: _,
            email,
            email_confirmed,
            password: _password,
            role,
            name,
            bio,
            photo_url,
            created_at,
        } = from;
        Self {
            email: email.into_string(),
            email_confirmed,
            role: role.into(),
            name,
            bio,
            photo_url,
            created_at: created_at.as_milliseconds(),
        }
    }
}

impl From<e::request::RequestStatus> for RequestStatus {
    fn from(from: e::request::RequestStatus) -> Self {
        use e::request::RequestStatus::*;
        match from {
            Pending => RequestStatus::Pending,
            Approved => RequestStatus::Approved,
            Rejected => RequestStatus::Rejected,
        }
    }
}

impl From<RequestStatus> for e::request::RequestStatus {
    fn from(from: RequestStatus) -> Self {
        use e::request::RequestStatus::*;
        match from {
            RequestStatus::Pending => Pending,
            RequestStatus::Approved => Approved,
            RequestStatus::Rejected => Rejected,
        }
    }
}

impl From<e::point::CollectionPoint> for CollectionPoint {
    fn from(from: e::point::CollectionPoint) -> Self {
        let e::point::CollectionPoint {
            id,
            name,
            category,
            pos,
            description,
            impact,
            address,
            opening_hours,
            contact,
            website,
            created_by,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            category: category.to_string(),
            lat: pos.lat(),
            lng: pos.lng(),
            description,
            impact,
            address,
            opening_hours,
            contact,
            website,
            created_by: created_by.map(e::email::EmailAddress::into_string),
            created_at: created_at.as_milliseconds(),
        }
    }
}

impl From<e::event::Event> for Event {
    fn from(from: e::event::Event) -> Self {
        let e::event::Event {
            id,
            title,
            description,
            date,
            time,
            address,
            organizer,
            pos,
            created_by,
            created_at,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            date: e::event::format_date(date),
            time: time.map(e::event::format_time),
            address,
            organizer,
            lat: pos.lat(),
            lng: pos.lng(),
            created_by: created_by.map(e::email::EmailAddress::into_string),
            created_at: created_at.as_milliseconds(),
        }
    }
}

impl From<e::request::PointRequest> for PointRequest {
    fn from(from: e::request::PointRequest) -> Self {
        let e::request::PointRequest {
            id,
            name,
            category,
            address,
            description,
            impact,
            status,
            created_by,
            created_at,
            decided_at,
            point_id,
        } = from;
        Self {
            id: id.into(),
            name,
            category: category.to_string(),
            address,
            description,
            impact,
            status: status.into(),
            created_by: created_by.into_string(),
            created_at: created_at.as_milliseconds(),
            decided_at: decided_at.map(e::time::Timestamp::as_milliseconds),
            point_id: point_id.map(Into::into),
        }
    }
}

impl From<e::request::EventRequest> for EventRequest {
    fn from(from: e::request::EventRequest) -> Self {
        let e::request::EventRequest {
            id,
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
            event_id,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            date: e::event::format_date(date),
            time: time.map(e::event::format_time),
            address,
            organizer,
            status: status.into(),
            created_by: created_by.into_string(),
            created_at: created_at.as_milliseconds(),
            decided_at: decided_at.map(e::time::Timestamp::as_milliseconds),
            event_id: event_id.map(Into::into),
        }
    }
}
