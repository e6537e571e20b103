use super::*;

#[get("/events")]
pub fn get_events(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::Event>> {
    let db = db.shared()?;
    let is_admin = auth.user_with_min_role(&db, Role::Admin).is_ok();
    let events = usecases::query_events(&db)?;
    Ok(Json(
        events
            .into_iter()
            .map(|ev| event_for_reader(ev, is_admin).into())
            .collect(),
    ))
}

#[get("/events/<id>")]
pub fn get_event(db: sqlite::Connections, auth: Auth, id: &str) -> Result<json::Event> {
    let db = db.shared()?;
    let is_admin = auth.user_with_min_role(&db, Role::Admin).is_ok();
    let event = usecases::get_event(&db, id)?;
    Ok(Json(event_for_reader(event, is_admin).into()))
}

#[post("/events", format = "application/json", data = "<new_event>")]
pub fn post_event(
    db: sqlite::Connections,
    account: Account,
    geo: &State<GeoCoding>,
    new_event: JsonResult<json::NewEvent>,
) -> Result<json::Event> {
    let admin = {
        let db = db.shared()?;
        usecases::authorize_user_by_email(&db, account.email(), Role::Admin)?
    };
    let new_event = from_json::new_event(new_event?.into_inner());
    let event = flows::create_event(&db, &*geo.0, Some(admin.email), new_event)?;
    Ok(Json(event.into()))
}

#[post("/events/<id>", format = "application/json", data = "<update>")]
pub fn post_event_update(
    db: sqlite::Connections,
    account: Account,
    geo: &State<GeoCoding>,
    id: &str,
    update: JsonResult<json::NewEvent>,
) -> Result<json::Event> {
    {
        let db = db.shared()?;
        usecases::authorize_user_by_email(&db, account.email(), Role::Admin)?;
    }
    let update = from_json::new_event(update?.into_inner());
    let event = flows::update_event(&db, &*geo.0, id, update)?;
    Ok(Json(event.into()))
}

#[delete("/events/<id>")]
pub fn delete_event(db: sqlite::Connections, account: Account, id: &str) -> Result<()> {
    {
        let db = db.shared()?;
        usecases::authorize_user_by_email(&db, account.email(), Role::Admin)?;
    }
    usecases::delete_event(&db.exclusive()?, id)?;
    Ok(Json(()))
}
