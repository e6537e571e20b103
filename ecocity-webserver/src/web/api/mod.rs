use std::{fmt::Display, result};

use ecocity_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::{Cookie, CookieJar, Status},
    post,
    response::{self, Responder},
    routes, Route, State,
};

use super::{guards::*, sqlite, Cfg};
use crate::adapters::json::{self, from_json};
use ecocity_application::prelude as flows;
use ecocity_core::{entities::*, repositories::*, usecases, usecases::Error as ParameterError};

mod error;
pub mod event_requests;
pub mod events;
pub mod point_requests;
pub mod points;
pub mod users;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_login,
        users::post_logout,
        users::post_user,
        users::confirm_email_address,
        users::post_request_password_reset,
        users::post_reset_password,
        users::get_current_user,
        users::post_current_user,
        users::delete_current_user,
        users::post_user_create,
        users::get_users,
        users::post_user_role,
        // ---   points   --- //
        points::get_points,
        points::get_point,
        points::post_point,
        points::post_point_update,
        points::delete_point,
        // ---   events   --- //
        events::get_events,
        events::get_event,
        events::post_event,
        events::post_event_update,
        events::delete_event,
        // ---   point requests   --- //
        point_requests::post_point_request,
        point_requests::get_point_requests,
        point_requests::approve_point_request,
        point_requests::reject_point_request,
        point_requests::delete_point_request,
        // ---   event requests   --- //
        event_requests::post_event_request,
        event_requests::get_event_requests,
        event_requests::approve_event_request,
        event_requests::reject_event_request,
        event_requests::delete_event_request,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

// Only administrators may see who submitted a point or event.
fn for_reader(point: CollectionPoint, is_admin: bool) -> CollectionPoint {
    if is_admin {
        point
    } else {
        point.strip_creator_details()
    }
}

fn event_for_reader(event: Event, is_admin: bool) -> Event {
    if is_admin {
        event
    } else {
        event.strip_creator_details()
    }
}
