use super::prelude::*;

/// Reject a pending point request.
///
/// Rejecting an already rejected request is a no-op, rejecting an approved
/// one fails, and a lost race against a concurrent decision fails as well.
pub fn reject_point_request<R: PointRequestRepo>(repo: &R, request_id: &str) -> Result<()> {
    let request = repo.get_point_request(request_id)?;
    match request.status {
        RequestStatus::Rejected => return Ok(()),
        RequestStatus::Approved => return Err(Error::RequestAlreadyDecided),
        RequestStatus::Pending => (),
    }
    let affected = repo.mark_point_request_decided(
        request_id,
        RequestStatus::Rejected,
        Timestamp::now(),
        None,
    )?;
    if affected == 0 {
        return Err(Error::RequestAlreadyDecided);
    }
    log::info!("Rejected point request {request_id}");
    Ok(())
}

pub fn reject_event_request<R: EventRequestRepo>(repo: &R, request_id: &str) -> Result<()> {
    let request = repo.get_event_request(request_id)?;
    match request.status {
        RequestStatus::Rejected => return Ok(()),
        RequestStatus::Approved => return Err(Error::RequestAlreadyDecided),
        RequestStatus::Pending => (),
    }
    let affected = repo.mark_event_request_decided(
        request_id,
        RequestStatus::Rejected,
        Timestamp::now(),
        None,
    )?;
    if affected == 0 {
        return Err(Error::RequestAlreadyDecided);
    }
    log::info!("Rejected event request {request_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn pending_request() -> PointRequest {
        PointRequest {
            id: Id::new(),
            name: "Ponto Norte".into(),
            category: PointCategory::LampCollection,
            address: "Av. Central 10".into(),
            description: "Lampadas usadas".into(),
            impact: String::new(),
            status: RequestStatus::Pending,
            created_by: "maria@example.org".parse().unwrap(),
            created_at: Timestamp::from_milliseconds(1_000),
            decided_at: None,
            point_id: None,
        }
    }

    #[test]
    fn reject_pending_request() {
        let db = MockDb::default();
        let request = pending_request();
        let request_id = request.id.clone();
        db.point_requests.borrow_mut().push(request);

        assert!(reject_point_request(&db, request_id.as_str()).is_ok());
        let stored = &db.point_requests.borrow()[0];
        assert_eq!(RequestStatus::Rejected, stored.status);
        assert!(stored.decided_at.is_some());
        assert!(stored.point_id.is_none());
        assert!(db.points.borrow().is_empty());
    }

    #[test]
    fn reject_twice_is_idempotent() {
        let db = MockDb::default();
        let request = pending_request();
        let request_id = request.id.clone();
        db.point_requests.borrow_mut().push(request);

        assert!(reject_point_request(&db, request_id.as_str()).is_ok());
        let decided_at = db.point_requests.borrow()[0].decided_at;
        assert!(reject_point_request(&db, request_id.as_str()).is_ok());
        // The original decision is kept.
        assert_eq!(decided_at, db.point_requests.borrow()[0].decided_at);
    }

    #[test]
    fn reject_approved_request_fails() {
        let db = MockDb::default();
        let mut request = pending_request();
        request.status = RequestStatus::Approved;
        request.decided_at = Some(Timestamp::from_milliseconds(2_000));
        request.point_id = Some(Id::new());
        let request_id = request.id.clone();
        db.point_requests.borrow_mut().push(request);

        assert!(matches!(
            reject_point_request(&db, request_id.as_str()),
            Err(Error::RequestAlreadyDecided)
        ));
        assert_eq!(RequestStatus::Approved, db.point_requests.borrow()[0].status);
    }
}
