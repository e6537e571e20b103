use super::*;

pub fn delete_point_request(connections: &sqlite::Connections, request_id: &str) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_point_request(conn, request_id))?;
    Ok(())
}

pub fn delete_event_request(connections: &sqlite::Connections, request_id: &str) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_event_request(conn, request_id))?;
    Ok(())
}
