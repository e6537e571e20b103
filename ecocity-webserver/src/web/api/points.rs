use super::*;

#[get("/points?<category>&<text>")]
pub fn get_points(
    db: sqlite::Connections,
    auth: Auth,
    category: Option<&str>,
    text: Option<&str>,
) -> Result<Vec<json::CollectionPoint>> {
    let db = db.shared()?;
    let is_admin = auth.user_with_min_role(&db, Role::Admin).is_ok();
    let category = category
        .filter(|c| !c.trim().is_empty())
        .map(|c| c.parse::<PointCategory>().map_err(|_| ParameterError::Category))
        .transpose()?;
    let points = usecases::query_points(&db)?;
    let points = usecases::visible_points(points, category, text);
    Ok(Json(
        points
            .into_iter()
            .map(|p| for_reader(p, is_admin).into())
            .collect(),
    ))
}

#[get("/points/<id>")]
pub fn get_point(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
) -> Result<json::CollectionPoint> {
    let db = db.shared()?;
    let is_admin = auth.user_with_min_role(&db, Role::Admin).is_ok();
    let point = usecases::get_point(&db, id)?;
    Ok(Json(for_reader(point, is_admin).into()))
}

#[post("/points", format = "application/json", data = "<new_point>")]
pub fn post_point(
    db: sqlite::Connections,
    account: Account,
    geo: &State<GeoCoding>,
    new_point: JsonResult<json::NewCollectionPoint>,
) -> Result<json::CollectionPoint> {
    let admin = {
        let db = db.shared()?;
        usecases::authorize_user_by_email(&db, account.email(), Role::Admin)?
    };
    let new_point = from_json::new_point(new_point?.into_inner());
    let point = flows::create_point(&db, &*geo.0, Some(admin.email), new_point)?;
    Ok(Json(point.into()))
}

#[post("/points/<id>", format = "application/json", data = "<update>")]
pub fn post_point_update(
    db: sqlite::Connections,
    account: Account,
    geo: &State<GeoCoding>,
    id: &str,
    update: JsonResult<json::NewCollectionPoint>,
) -> Result<json::CollectionPoint> {
    {
        let db = db.shared()?;
        usecases::authorize_user_by_email(&db, account.email(), Role::Admin)?;
    }
    let update = from_json::new_point(update?.into_inner());
    let point = flows::update_point(&db, &*geo.0, id, update)?;
    Ok(Json(point.into()))
}

#[delete("/points/<id>")]
pub fn delete_point(db: sqlite::Connections, account: Account, id: &str) -> Result<()> {
    {
        let db = db.shared()?;
        usecases::authorize_user_by_email(&db, account.email(), Role::Admin)?;
    }
    usecases::delete_point(&db.exclusive()?, id)?;
    Ok(Json(()))
}
