use ecocity_core::gateways::geocode::GeoCodingGateway;

use super::*;

/// Approve a pending event request and publish the proposed event.
pub fn approve_event_request(
    connections: &sqlite::Connections,
    geo_gw: &dyn GeoCodingGateway,
    request_id: &str,
) -> Result<Event> {
    let request = connections.shared()?.get_event_request(request_id)?;
    if request.status.is_decided() {
        return Err(usecases::Error::RequestAlreadyDecided.into());
    }
    let pos = resolve_pos(geo_gw, &request.address)?;
    let event = connections.exclusive()?.transaction(|conn| {
        usecases::approve_event_request(conn, request_id, pos).map_err(|err| {
            warn!("Failed to approve event request {request_id}: {err}");
            err
        })
    })?;
    Ok(event)
}
