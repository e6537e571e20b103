use super::*;

pub fn create_event_request(
    connections: &sqlite::Connections,
    created_by: EmailAddress,
    new_request: usecases::NewEventRequest,
) -> Result<EventRequest> {
    let request = connections
        .exclusive()?
        .transaction(|conn| usecases::create_event_request(conn, created_by, new_request))?;
    Ok(request)
}
