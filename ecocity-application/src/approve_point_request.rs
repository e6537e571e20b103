use ecocity_core::gateways::geocode::GeoCodingGateway;

use super::*;

/// Approve a pending point request and publish the proposed point.
///
/// The address is geocoded before the exclusive transaction starts.
/// Inserting the point and marking the request as approved happen
/// atomically, a lost race leaves no half-published point behind.
pub fn approve_point_request(
    connections: &sqlite::Connections,
    geo_gw: &dyn GeoCodingGateway,
    request_id: &str,
) -> Result<CollectionPoint> {
    let request = connections.shared()?.get_point_request(request_id)?;
    if request.status.is_decided() {
        return Err(usecases::Error::RequestAlreadyDecided.into());
    }
    let pos = resolve_pos(geo_gw, &request.address)?;
    let point = connections.exclusive()?.transaction(|conn| {
        usecases::approve_point_request(conn, request_id, pos).map_err(|err| {
            warn!("Failed to approve point request {request_id}: {err}");
            err
        })
    })?;
    Ok(point)
}
