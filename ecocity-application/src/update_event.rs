use ecocity_core::gateways::geocode::GeoCodingGateway;

use super::*;

/// Edit a published event, re-geocoding the submitted address.
pub fn update_event(
    connections: &sqlite::Connections,
    geo_gw: &dyn GeoCodingGateway,
    id: &str,
    update: usecases::NewEvent,
) -> Result<Event> {
    let pos = resolve_pos(geo_gw, &update.address)?;
    let event = connections
        .exclusive()?
        .transaction(|conn| usecases::update_event(conn, id, pos, update))?;
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn edit_published_event() {
        let fixture = BackendFixture::new();
        let old = flows::create_event(
            &fixture.db_connections,
            &fixture.geo,
            Some("admin@eco.city".parse().unwrap()),
            usecases::NewEvent {
                title: "Mutirao de limpeza".into(),
                description: "Limpeza do parque".into(),
                date: "2026-10-03".into(),
                time: Some("09:30".into()),
                address: "Parque da Cidade".into(),
                organizer: "Grupo EcoCidade".into(),
            },
        )
        .unwrap();

        let updated = flows::update_event(
            &fixture.db_connections,
            &fixture.geo,
            old.id.as_ref(),
            usecases::NewEvent {
                title: "Mutirao adiado".into(),
                description: "Limpeza do parque".into(),
                date: "2026-10-10".into(),
                time: None,
                address: "Parque da Cidade".into(),
                organizer: "Grupo EcoCidade".into(),
            },
        )
        .unwrap();

        assert_eq!(old.id, updated.id);
        assert_eq!("Mutirao adiado", updated.title);
        assert!(updated.time.is_none());
        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(1, db.count_events().unwrap());
    }
}
