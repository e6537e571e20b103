use ecocity_core::gateways::geocode::GeoCodingGateway;

use super::*;

/// Publish a collection point directly, bypassing the request workflow.
///
/// Reserved for administrators, enforced by the web layer.
pub fn create_point(
    connections: &sqlite::Connections,
    geo_gw: &dyn GeoCodingGateway,
    created_by: Option<EmailAddress>,
    new_point: usecases::NewPoint,
) -> Result<CollectionPoint> {
    let pos = resolve_pos(geo_gw, &new_point.address)?;
    let point = connections
        .exclusive()?
        .transaction(|conn| usecases::create_new_point(conn, created_by, pos, new_point))?;
    Ok(point)
}
