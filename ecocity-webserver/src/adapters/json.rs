pub use ecocity_boundary::*;

use ecocity_core::usecases;
use ecocity_entities as e;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    pub fn try_new_user(new_user: NewUser) -> anyhow::Result<usecases::NewUser> {
        let NewUser {
            email,
            password,
            name,
        } = new_user;
        let email = email.parse::<e::email::EmailAddress>()?;
        Ok(usecases::NewUser {
            email,
            password,
            name,
        })
    }

    pub fn new_point_request(from: NewPointRequest) -> usecases::NewPointRequest {
        let NewPointRequest {
            name,
            category,
            address,
            description,
            impact,
        } = from;
        usecases::NewPointRequest {
            name,
            category,
            address,
            description,
            impact,
        }
    }

    pub fn new_event_request(from: NewEventRequest) -> usecases::NewEventRequest {
        let NewEventRequest {
            title,
            description,
            date,
            time,
            address,
            organizer,
        } = from;
        usecases::NewEventRequest {
            title,
            description,
            date,
            time,
            address,
            organizer,
        }
    }

    pub fn new_point(from: NewCollectionPoint) -> usecases::NewPoint {
        let NewCollectionPoint {
            name,
            category,
            address,
            description,
            impact,
            opening_hours,
            contact,
            website,
        } = from;
        usecases::NewPoint {
            name,
            category,
            address,
            description,
            impact,
            opening_hours,
            contact,
            website,
        }
    }

    pub fn new_event(from: NewEvent) -> usecases::NewEvent {
        let NewEvent {
            title,
            description,
            date,
            time,
            address,
            organizer,
        } = from;
        usecases::NewEvent {
            title,
            description,
            date,
            time,
            address,
            organizer,
        }
    }

    pub fn user_profile_update(from: UpdateUserProfile) -> usecases::UserProfileUpdate {
        let UpdateUserProfile {
            name,
            bio,
            photo_url,
        } = from;
        usecases::UserProfileUpdate {
            name,
            bio,
            photo_url,
        }
    }
}
