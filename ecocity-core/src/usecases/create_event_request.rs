use super::prelude::*;
use crate::util::validate;
use ecocity_entities::event::{parse_date, parse_time};

#[derive(Debug, Clone)]
pub struct NewEventRequest {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: Option<String>,
    pub address: String,
    pub organizer: String,
}

pub fn create_event_request<R: EventRequestRepo>(
    repo: &R,
    created_by: EmailAddress,
    new_request: NewEventRequest,
) -> Result<EventRequest> {
    let NewEventRequest {
        title,
        description,
        date,
        time,
        address,
        organizer,
    } = new_request;
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
    let request = EventRequest {
        id: Id::new(),
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        date,
        time,
        address: address.trim().to_string(),
        organizer: organizer.trim().to_string(),
        status: RequestStatus::Pending,
        created_by,
        created_at: Timestamp::now(),
        decided_at: None,
        event_id: None,
    };
    log::debug!(
        "Creating event request {} for {}",
        request.id,
        request.created_by
    );
    repo.create_event_request(&request)?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_request() -> NewEventRequest {
        NewEventRequest {
            title: "Mutirao de limpeza".into(),
            description: "Limpeza da praia".into(),
            date: "2026-09-12".into(),
            time: Some("09:00".into()),
            address: "Praia do Forte".into(),
            organizer: "Associacao EcoBairro".into(),
        }
    }

    #[test]
    fn create_pending_request() {
        let db = MockDb::default();
        let creator = "joao@example.org".parse().unwrap();
        let request = create_event_request(&db, creator, new_request()).unwrap();
        assert_eq!(RequestStatus::Pending, request.status);
        assert!(request.event_id.is_none());
        assert_eq!(1, db.event_requests.borrow().len());
    }

    #[test]
    fn reject_invalid_date() {
        let db = MockDb::default();
        let creator = "joao@example.org".parse().unwrap();
        let mut invalid = new_request();
        invalid.date = "12/09/2026".into();
        assert!(matches!(
            create_event_request(&db, creator, invalid),
            Err(Error::Date)
        ));
    }

    #[test]
    fn empty_time_is_treated_as_none() {
        let db = MockDb::default();
        let creator = "joao@example.org".parse().unwrap();
        let mut request = new_request();
        request.time = Some("  ".into());
        let request = create_event_request(&db, creator, request).unwrap();
        assert!(request.time.is_none());
    }

    #[test]
    fn reject_blank_organizer() {
        let db = MockDb::default();
        let creator = "joao@example.org".parse().unwrap();
        let mut invalid = new_request();
        invalid.organizer = String::new();
        assert!(matches!(
            create_event_request(&db, creator, invalid),
            Err(Error::Organizer)
        ));
    }
}
