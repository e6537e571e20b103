use super::prelude::*;

/// Publish the community event proposed by a pending request.
///
/// Mirrors [`approve_point_request`](super::approve_point_request): the
/// caller geocodes the address first and runs this in an exclusive
/// transaction.
pub fn approve_event_request<D: Db>(db: &D, request_id: &str, pos: MapPoint) -> Result<Event> {
    let request = db.get_event_request(request_id)?;
    if request.status.is_decided() {
        return Err(Error::RequestAlreadyDecided);
    }
    let decided_at = Timestamp::now();
    let event = Event {
        id: Id::new(),
        title: request.title,
        description: request.description,
        date: request.date,
        time: request.time,
        address: request.address,
        organizer: request.organizer,
        pos,
        created_by: Some(request.created_by),
        created_at: decided_at,
    };
    db.create_event(&event)?;
    let affected = db.mark_event_request_decided(
        request_id,
        RequestStatus::Approved,
        decided_at,
        Some(&event.id),
    )?;
    if affected == 0 {
        return Err(Error::RequestAlreadyDecided);
    }
    log::info!("Approved event request {} as event {}", request_id, event.id);
    Ok(event)
}
