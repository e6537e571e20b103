#[macro_use]
extern crate log;

mod approve_event_request;
mod approve_point_request;
mod change_user_role;
mod create_event;
mod create_event_request;
mod create_point;
mod create_point_request;
mod delete_request;
mod reject_request;
mod reset_password;
mod update_event;
mod update_point;

pub mod prelude {
    pub use super::{
        approve_event_request::*, approve_point_request::*, change_user_role::*, create_event::*,
        create_event_request::*, create_point::*, create_point_request::*, delete_request::*,
        reject_request::*, reset_password::*, update_event::*, update_point::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use ecocity_core::{db::*, entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use ecocity_db_sqlite::Connections;
}

use ecocity_core::gateways::geocode::GeoCodingGateway;

/// Resolve a request address to validated coordinates.
///
/// Geocoding talks to an external service and must never run inside an
/// exclusive database transaction.
pub(crate) fn resolve_pos(
    geo_gw: &dyn GeoCodingGateway,
    address: &str,
) -> std::result::Result<MapPoint, usecases::Error> {
    let (lat, lng) = geo_gw
        .resolve_address_lat_lng(address)
        .ok_or(usecases::Error::Geocode)?;
    MapPoint::try_from_lat_lng_deg(lat, lng).map_err(|err| {
        warn!("Geocoder returned invalid coordinates for '{address}': {err}");
        usecases::Error::Geocode
    })
}
