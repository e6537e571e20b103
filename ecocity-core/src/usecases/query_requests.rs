use super::prelude::*;

/// Which requests a caller is allowed to see.
#[derive(Debug, Clone)]
pub enum RequestScope {
    All,
    CreatedBy(EmailAddress),
}

pub fn query_point_requests<R: PointRequestRepo>(
    repo: &R,
    scope: RequestScope,
) -> Result<Vec<PointRequest>> {
    let mut requests = match scope {
        RequestScope::All => repo.all_point_requests()?,
        RequestScope::CreatedBy(email) => repo.point_requests_created_by(&email)?,
    };
    requests.sort_unstable_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(requests)
}

pub fn query_event_requests<R: EventRequestRepo>(
    repo: &R,
    scope: RequestScope,
) -> Result<Vec<EventRequest>> {
    let mut requests = match scope {
        RequestScope::All => repo.all_event_requests()?,
        RequestScope::CreatedBy(email) => repo.event_requests_created_by(&email)?,
    };
    requests.sort_unstable_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn newest_requests_first() {
        let db = MockDb::default();
        let creator: EmailAddress = "maria@example.org".parse().unwrap();
        for (name, millis) in [("old", 1_000), ("new", 3_000), ("mid", 2_000)] {
            db.point_requests.borrow_mut().push(PointRequest {
                id: Id::new(),
                name: name.to_string(),
                category: PointCategory::RecyclingPoint,
                address: "Rua A".into(),
                description: "d".into(),
                impact: String::new(),
                status: RequestStatus::Pending,
                created_by: creator.clone(),
                created_at: Timestamp::from_milliseconds(millis),
                decided_at: None,
                point_id: None,
            });
        }
        let requests = query_point_requests(&db, RequestScope::All).unwrap();
        let names: Vec<_> = requests.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(vec!["new", "mid", "old"], names);
    }

    #[test]
    fn scope_filters_by_creator() {
        let db = MockDb::default();
        let maria: EmailAddress = "maria@example.org".parse().unwrap();
        let joao: EmailAddress = "joao@example.org".parse().unwrap();
        for creator in [&maria, &joao, &maria] {
            db.point_requests.borrow_mut().push(PointRequest {
                id: Id::new(),
                name: "p".into(),
                category: PointCategory::OilCollection,
                address: "Rua B".into(),
                description: "d".into(),
                impact: String::new(),
                status: RequestStatus::Pending,
                created_by: creator.clone(),
                created_at: Timestamp::now(),
                decided_at: None,
                point_id: None,
            });
        }
        let requests = query_point_requests(&db, RequestScope::CreatedBy(maria.clone())).unwrap();
        assert_eq!(2, requests.len());
        assert!(requests.iter().all(|r| r.created_by == maria));
    }
}
