use super::*;

pub fn create_point_request(
    connections: &sqlite::Connections,
    created_by: EmailAddress,
    new_request: usecases::NewPointRequest,
) -> Result<PointRequest> {
    let request = connections
        .exclusive()?
        .transaction(|conn| usecases::create_point_request(conn, created_by, new_request))?;
    Ok(request)
}
