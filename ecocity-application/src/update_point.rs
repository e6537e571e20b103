use ecocity_core::gateways::geocode::GeoCodingGateway;

use super::*;

/// Edit a published collection point.
///
/// The submitted address is geocoded again, so moving a point to a new
/// address also moves it on the map.
pub fn update_point(
    connections: &sqlite::Connections,
    geo_gw: &dyn GeoCodingGateway,
    id: &str,
    update: usecases::NewPoint,
) -> Result<CollectionPoint> {
    let pos = resolve_pos(geo_gw, &update.address)?;
    let point = connections
        .exclusive()?
        .transaction(|conn| usecases::update_point(conn, id, pos, update))?;
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn point_fields(name: &str, address: &str) -> usecases::NewPoint {
        usecases::NewPoint {
            name: name.into(),
            category: "recycling-point".into(),
            address: address.into(),
            description: "Recolha de vidro".into(),
            impact: String::new(),
            opening_hours: None,
            contact: None,
            website: None,
        }
    }

    #[test]
    fn edit_published_point() {
        let fixture = BackendFixture::new();
        let old = flows::create_point(
            &fixture.db_connections,
            &fixture.geo,
            Some("admin@eco.city".parse().unwrap()),
            point_fields("Ecoponto Centro", "Rua das Flores 1"),
        )
        .unwrap();

        let updated = flows::update_point(
            &fixture.db_connections,
            &fixture.geo,
            old.id.as_ref(),
            point_fields("Ecoponto Centro Renovado", "Rua das Flores 2"),
        )
        .unwrap();

        assert_eq!(old.id, updated.id);
        assert_eq!(old.created_by, updated.created_by);
        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(1, db.count_points().unwrap());
        assert_eq!(
            "Ecoponto Centro Renovado",
            db.get_point(old.id.as_ref()).unwrap().name
        );
    }

    #[test]
    fn failed_geocoding_leaves_point_untouched() {
        let fixture = BackendFixture::new();
        let old = flows::create_point(
            &fixture.db_connections,
            &fixture.geo,
            None,
            point_fields("Ecoponto Centro", "Rua das Flores 1"),
        )
        .unwrap();
        let broken_geo = FailingGeoGw;

        assert!(matches!(
            flows::update_point(
                &fixture.db_connections,
                &broken_geo,
                old.id.as_ref(),
                point_fields("Ecoponto Renomeado", "Endereco Inexistente"),
            ),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::Geocode
            )))
        ));
        let db = fixture.db_connections.shared().unwrap();
        assert_eq!("Ecoponto Centro", db.get_point(old.id.as_ref()).unwrap().name);
    }
}
