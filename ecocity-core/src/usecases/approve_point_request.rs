use super::prelude::*;

/// Publish the collection point proposed by a pending request.
///
/// The caller resolves the request address to coordinates beforehand and
/// wraps this call in an exclusive transaction. The status transition only
/// succeeds while the request is still pending, so a concurrent decision
/// rolls the freshly inserted point back together with the failed update.
pub fn approve_point_request<D: Db>(
    db: &D,
    request_id: &str,
    pos: MapPoint,
) -> Result<CollectionPoint> {
    let request = db.get_point_request(request_id)?;
    if request.status.is_decided() {
        return Err(Error::RequestAlreadyDecided);
    }
    let decided_at = Timestamp::now();
    let point = CollectionPoint {
        id: Id::new(),
        name: request.name,
        category: request.category,
        pos,
        description: request.description,
        impact: request.impact,
        address: request.address,
        opening_hours: None,
        contact: None,
        website: None,
        created_by: Some(request.created_by),
        created_at: decided_at,
    };
    db.create_point(&point)?;
    let affected = db.mark_point_request_decided(
        request_id,
        RequestStatus::Approved,
        decided_at,
        Some(&point.id),
    )?;
    if affected == 0 {
        return Err(Error::RequestAlreadyDecided);
    }
    log::info!(
        "Approved point request {} as collection point {}",
        request_id,
        point.id
    );
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::RepoError;

    fn pending_request() -> PointRequest {
        PointRequest {
            id: Id::new(),
            name: "Ponto Centro".into(),
            category: PointCategory::RecyclingPoint,
            address: "Rua das Flores 1, Lisboa".into(),
            description: "Recolha de vidro".into(),
            impact: "Menos residuos".into(),
            status: RequestStatus::Pending,
            created_by: "maria@example.org".parse().unwrap(),
            created_at: Timestamp::from_milliseconds(1_000),
            decided_at: None,
            point_id: None,
        }
    }

    fn pos() -> MapPoint {
        MapPoint::try_from_lat_lng_deg(38.716, -9.139).unwrap()
    }

    #[test]
    fn approve_pending_request() {
        let db = MockDb::default();
        let request = pending_request();
        let request_id = request.id.clone();
        db.point_requests.borrow_mut().push(request);

        let point = approve_point_request(&db, request_id.as_str(), pos()).unwrap();

        assert_eq!("Ponto Centro", point.name);
        assert_eq!(pos(), point.pos);
        assert_eq!(
            Some("maria@example.org"),
            point.created_by.as_ref().map(EmailAddress::as_str)
        );
        assert_eq!(1, db.points.borrow().len());
        let stored = &db.point_requests.borrow()[0];
        assert_eq!(RequestStatus::Approved, stored.status);
        assert!(stored.decided_at.is_some());
        assert_eq!(Some(&point.id), stored.point_id.as_ref());
    }

    #[test]
    fn approve_twice_fails_without_second_point() {
        let db = MockDb::default();
        let request = pending_request();
        let request_id = request.id.clone();
        db.point_requests.borrow_mut().push(request);

        assert!(approve_point_request(&db, request_id.as_str(), pos()).is_ok());
        assert!(matches!(
            approve_point_request(&db, request_id.as_str(), pos()),
            Err(Error::RequestAlreadyDecided)
        ));
        assert_eq!(1, db.points.borrow().len());
    }

    #[test]
    fn approve_unknown_request() {
        let db = MockDb::default();
        assert!(matches!(
            approve_point_request(&db, "no-such-id", pos()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
