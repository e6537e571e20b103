use super::*;

pub fn reject_point_request(connections: &sqlite::Connections, request_id: &str) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::reject_point_request(conn, request_id).map_err(|err| {
            warn!("Failed to reject point request {request_id}: {err}");
            err
        })
    })?;
    Ok(())
}

pub fn reject_event_request(connections: &sqlite::Connections, request_id: &str) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::reject_event_request(conn, request_id).map_err(|err| {
            warn!("Failed to reject event request {request_id}: {err}");
            err
        })
    })?;
    Ok(())
}
