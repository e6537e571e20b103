use ecocity_core::gateways::geocode::GeoCodingGateway;

use super::*;

/// Publish an event directly, bypassing the request workflow.
pub fn create_event(
    connections: &sqlite::Connections,
    geo_gw: &dyn GeoCodingGateway,
    created_by: Option<EmailAddress>,
    new_event: usecases::NewEvent,
) -> Result<Event> {
    let pos = resolve_pos(geo_gw, &new_event.address)?;
    let event = connections
        .exclusive()?
        .transaction(|conn| usecases::create_new_event(conn, created_by, pos, new_event))?;
    Ok(event)
}
