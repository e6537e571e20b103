use super::*;

#[post("/event-requests", format = "application/json", data = "<new_request>")]
pub fn post_event_request(
    db: sqlite::Connections,
    account: Account,
    new_request: JsonResult<json::NewEventRequest>,
) -> Result<json::EventRequest> {
    // Only users with a confirmed e-mail address may submit requests.
    let user = db.shared()?.get_user_by_email(account.email())?;
    if !user.email_confirmed {
        return Err(ParameterError::EmailNotConfirmed.into());
    }
    let new_request = from_json::new_event_request(new_request?.into_inner());
    let request = flows::create_event_request(&db, user.email, new_request)?;
    Ok(Json(request.into()))
}

#[get("/event-requests")]
pub fn get_event_requests(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::EventRequest>> {
    let db = db.shared()?;
    let scope = if usecases::authorize_user_by_email(&db, account.email(), Role::Admin).is_ok() {
        usecases::RequestScope::All
    } else {
        usecases::RequestScope::CreatedBy(account.email().clone())
    };
    let requests = usecases::query_event_requests(&db, scope)?;
    Ok(Json(requests.into_iter().map(Into::into).collect()))
}

#[post("/event-requests/<id>/approve")]
pub fn approve_event_request(
    db: sqlite::Connections,
    account: Account,
    geo: &State<GeoCoding>,
    id: &str,
) -> Result<json::Event> {
    {
        let db = db.shared()?;
        usecases::authorize_user_by_email(&db, account.email(), Role::Admin)?;
    }
    let event = flows::approve_event_request(&db, &*geo.0, id)?;
    Ok(Json(event.into()))
}

#[post("/event-requests/<id>/reject")]
pub fn reject_event_request(db: sqlite::Connections, account: Account, id: &str) -> Result<()> {
    {
        let db = db.shared()?;
        usecases::authorize_user_by_email(&db, account.email(), Role::Admin)?;
    }
    flows::reject_event_request(&db, id)?;
    Ok(Json(()))
}

#[delete("/event-requests/<id>")]
pub fn delete_event_request(db: sqlite::Connections, account: Account, id: &str) -> Result<()> {
    {
        let db = db.shared()?;
        usecases::authorize_user_by_email(&db, account.email(), Role::Admin)?;
    }
    flows::delete_event_request(&db, id)?;
    Ok(Json(()))
}
