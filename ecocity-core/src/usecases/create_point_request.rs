use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewPointRequest {
    pub name: String,
    pub category: String,
    pub address: String,
    pub description: String,
    pub impact: String,
}

pub fn create_point_request<R: PointRequestRepo>(
    repo: &R,
    created_by: EmailAddress,
    new_request: NewPointRequest,
) -> Result<PointRequest> {
    let NewPointRequest {
        name,
        category,
        address,
        description,
        impact,
    } = new_request;
    let category = category.parse::<PointCategory>().map_err(|_| Error::Category)?;
    if !validate::is_non_blank(&name) {
        return Err(Error::Name);
    }
    if !validate::is_non_blank(&address) {
        return Err(Error::Address);
    }
    if !validate::is_non_blank(&description) {
        return Err(Error::Description);
    }
    let request = PointRequest {
        id: Id::new(),
        name: name.trim().to_string(),
        category,
        address: address.trim().to_string(),
        description: description.trim().to_string(),
        impact: impact.trim().to_string(),
        status: RequestStatus::Pending,
        created_by,
        created_at: Timestamp::now(),
        decided_at: None,
        point_id: None,
    };
    log::debug!(
        "Creating point request {} for {}",
        request.id,
        request.created_by
    );
    repo.create_point_request(&request)?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_request() -> NewPointRequest {
        NewPointRequest {
            name: "Ponto Centro".into(),
            category: "recycling-point".into(),
            address: "Rua das Flores 1, Lisboa".into(),
            description: "Recolha de vidro e papel".into(),
            impact: "Menos residuos no bairro".into(),
        }
    }

    #[test]
    fn create_pending_request() {
        let db = MockDb::default();
        let creator = "maria@example.org".parse().unwrap();
        let request = create_point_request(&db, creator, new_request()).unwrap();
        assert_eq!(RequestStatus::Pending, request.status);
        assert!(request.decided_at.is_none());
        assert!(request.point_id.is_none());
        assert_eq!(1, db.point_requests.borrow().len());
    }

    #[test]
    fn reject_unknown_category() {
        let db = MockDb::default();
        let creator = "maria@example.org".parse().unwrap();
        let mut invalid = new_request();
        invalid.category = "space-debris".into();
        assert!(matches!(
            create_point_request(&db, creator, invalid),
            Err(Error::Category)
        ));
        assert!(db.point_requests.borrow().is_empty());
    }

    #[test]
    fn reject_blank_fields() {
        let db = MockDb::default();
        let creator: EmailAddress = "maria@example.org".parse().unwrap();
        let mut invalid = new_request();
        invalid.name = "  ".into();
        assert!(matches!(
            create_point_request(&db, creator.clone(), invalid),
            Err(Error::Name)
        ));
        let mut invalid = new_request();
        invalid.address = String::new();
        assert!(matches!(
            create_point_request(&db, creator, invalid),
            Err(Error::Address)
        ));
    }
}
