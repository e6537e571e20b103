use super::*;

#[post("/point-requests", format = "application/json", data = "<new_request>")]
pub fn post_point_request(
    db: sqlite::Connections,
    account: Account,
    new_request: JsonResult<json::NewPointRequest>,
) -> Result<json::PointRequest> {
    // Only users with a confirmed e-mail address may submit requests.
    let user = db.shared()?.get_user_by_email(account.email())?;
    if !user.email_confirmed {
        return Err(ParameterError::EmailNotConfirmed.into());
    }
    let new_request = from_json::new_point_request(new_request?.into_inner());
    let request = flows::create_point_request(&db, user.email, new_request)?;
    Ok(Json(request.into()))
}

#[get("/point-requests")]
pub fn get_point_requests(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::PointRequest>> {
    let db = db.shared()?;
    // Administrators see all requests, everybody else only their own.
    let scope = if usecases::authorize_user_by_email(&db, account.email(), Role::Admin).is_ok() {
        usecases::RequestScope::All
    } else {
        usecases::RequestScope::CreatedBy(account.email().clone())
    };
    let requests = usecases::query_point_requests(&db, scope)?;
    Ok(Json(requests.into_iter().map(Into::into).collect()))
}

#[post("/point-requests/<id>/approve")]
pub fn approve_point_request(
    db: sqlite::Connections,
    account: Account,
    geo: &State<GeoCoding>,
    id: &str,
) -> Result<json::CollectionPoint> {
    {
        let db = db.shared()?;
        usecases::authorize_user_by_email(&db, account.email(), Role::Admin)?;
    }
    let point = flows::approve_point_request(&db, &*geo.0, id)?;
    Ok(Json(point.into()))
}

#[post("/point-requests/<id>/reject")]
pub fn reject_point_request(db: sqlite::Connections, account: Account, id: &str) -> Result<()> {
    {
        let db = db.shared()?;
        usecases::authorize_user_by_email(&db, account.email(), Role::Admin)?;
    }
    flows::reject_point_request(&db, id)?;
    Ok(Json(()))
}

#[delete("/point-requests/<id>")]
pub fn delete_point_request(db: sqlite::Connections, account: Account, id: &str) -> Result<()> {
    {
        let db = db.shared()?;
        usecases::authorize_user_by_email(&db, account.email(), Role::Admin)?;
    }
    flows::delete_point_request(&db, id)?;
    Ok(Json(()))
}
