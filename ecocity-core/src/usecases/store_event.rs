use super::prelude::*;
use crate::util::validate;
use ecocity_entities::event::{parse_date, parse_time};

/// Parameters for an event added directly by an administrator.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: Option<String>,
    pub address: String,
    pub organizer: String,
}

pub fn create_new_event<R: EventRepo>(
    repo: &R,
    created_by: Option<EmailAddress>,
    pos: MapPoint,
    new_event: NewEvent,
) -> Result<Event> {
    let NewEvent {
        title,
        description,
        date,
        time,
        address,
        organizer,
    } = new_event;
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
    let event = Event {
        id: Id::new(),
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        date,
        time,
        address: address.trim().to_string(),
        organizer: organizer.trim().to_string(),
        pos,
        created_by,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating event {}", event.id);
    repo.create_event(&event)?;
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn create_event_directly() {
        let db = MockDb::default();
        let pos = MapPoint::try_from_lat_lng_deg(-22.9, -43.2).unwrap();
        let event = create_new_event(
            &db,
            None,
            pos,
            NewEvent {
                title: "Feira de trocas".into(),
                description: "Troque objetos usados".into(),
                date: "2026-10-03".into(),
                time: Some("10:00".into()),
                address: "Praca Principal".into(),
                organizer: "Prefeitura".into(),
            },
        )
        .unwrap();
        assert_eq!("Feira de trocas", event.title);
        assert!(event.time.is_some());
        assert_eq!(1, db.events.borrow().len());
    }
}
