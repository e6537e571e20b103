use super::{prelude::*, store_event::NewEvent};
use crate::util::validate;
use ecocity_entities::event::{parse_date, parse_time};

/// Replace the descriptive fields of a published event.
pub fn update_event<R: EventRepo>(
    repo: &R,
    id: &str,
    pos: MapPoint,
    update: NewEvent,
) -> Result<Event> {
    let NewEvent {
        title,
        description,
        date,
        time,
        address,
        organizer,
    } = update;
    if !validate::is_non_blank(&title) {
        return Err(Error::Title);
    }
    if !validate::is_non_blank(&address) {
        return Err(Error::Address);
    }
    if !validate::is_non_blank(&description) {
        return Err(Error::Description);
    }
    if !validate::is_non_blank(&organizer) {
        return Err(Error::Organizer);
    }
    let date = parse_date(&date)?;
    let time = time
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(parse_time)
        .transpose()?;
    let old = repo.get_event(id)?;
    let event = Event {
        id: old.id,
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        date,
        time,
        address: address.trim().to_string(),
        organizer: organizer.trim().to_string(),
        pos,
        created_by: old.created_by,
        created_at: old.created_at,
    };
    log::debug!("Updating event {}", event.id);
    repo.update_event(&event)?;
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_event(title: &str, date: &str) -> NewEvent {
        NewEvent {
            title: title.into(),
            description: "Limpeza do parque".into(),
            date: date.into(),
            time: Some("09:30".into()),
            address: "Parque da Cidade".into(),
            organizer: "Grupo EcoCidade".into(),
        }
    }

    #[test]
    fn edit_replaces_fields_and_keeps_identity() {
        let db = MockDb::default();
        let pos = MapPoint::try_from_lat_lng_deg(38.7, -9.1).unwrap();
        let old = super::super::create_new_event(
            &db,
            Some("joao@example.org".parse().unwrap()),
            pos,
            new_event("Mutirao de limpeza", "2026-10-03"),
        )
        .unwrap();

        let updated = update_event(
            &db,
            old.id.as_ref(),
            pos,
            new_event("Mutirao adiado", "2026-10-10"),
        )
        .unwrap();

        assert_eq!(old.id, updated.id);
        assert_eq!(old.created_by, updated.created_by);
        assert_eq!("Mutirao adiado", updated.title);
        assert_eq!("2026-10-10", ecocity_entities::event::format_date(updated.date));
        assert_eq!(1, db.events.borrow().len());
    }

    #[test]
    fn invalid_date_is_rejected_without_write() {
        let db = MockDb::default();
        let pos = MapPoint::try_from_lat_lng_deg(38.7, -9.1).unwrap();
        let old = super::super::create_new_event(
            &db,
            None,
            pos,
            new_event("Mutirao de limpeza", "2026-10-03"),
        )
        .unwrap();

        assert!(matches!(
            update_event(&db, old.id.as_ref(), pos, new_event("Mutirao", "10/03/2026")),
            Err(Error::Date)
        ));
        assert_eq!("Mutirao de limpeza", db.events.borrow()[0].title);
    }
}
