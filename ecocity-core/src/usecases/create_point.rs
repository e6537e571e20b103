use super::prelude::*;
use crate::util::validate;

/// Parameters for a collection point added directly by an administrator.
#[derive(Debug, Clone)]
pub struct NewPoint {
    pub name: String,
    pub category: String,
    pub address: String,
    pub description: String,
    pub impact: String,
    pub opening_hours: Option<String>,
    pub contact: Option<String>,
    pub website: Option<String>,
}

pub fn create_new_point<R: PointRepo>(
    repo: &R,
    created_by: Option<EmailAddress>,
    pos: MapPoint,
    new_point: NewPoint,
) -> Result<CollectionPoint> {
    let NewPoint {
        name,
        category,
        address,
        description,
        impact,
        opening_hours,
        contact,
        website,
    } = new_point;
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
    let point = CollectionPoint {
        id: Id::new(),
        name: name.trim().to_string(),
        category,
        pos,
        description: description.trim().to_string(),
        impact: impact.trim().to_string(),
        address: address.trim().to_string(),
        opening_hours: opening_hours.filter(|s| !s.trim().is_empty()),
        contact: contact.filter(|s| !s.trim().is_empty()),
        website: website.filter(|s| !s.trim().is_empty()),
        created_by,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating collection point {}", point.id);
    repo.create_point(&point)?;
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_point() -> NewPoint {
        NewPoint {
            name: "Ecoponto Sul".into(),
            category: "recycling-center".into(),
            address: "Estrada Velha 5".into(),
            description: "Centro de triagem".into(),
            impact: String::new(),
            opening_hours: Some("seg-sex 9h-17h".into()),
            contact: None,
            website: Some("   ".into()),
        }
    }

    #[test]
    fn create_point_directly() {
        let db = MockDb::default();
        let pos = MapPoint::try_from_lat_lng_deg(38.7, -9.1).unwrap();
        let point = create_new_point(&db, None, pos, new_point()).unwrap();
        assert_eq!(PointCategory::RecyclingCenter, point.category);
        assert_eq!(Some("seg-sex 9h-17h"), point.opening_hours.as_deref());
        // Blank optional fields are dropped.
        assert!(point.website.is_none());
        assert_eq!(1, db.points.borrow().len());
    }

    #[test]
    fn reject_invalid_category() {
        let db = MockDb::default();
        let pos = MapPoint::try_from_lat_lng_deg(38.7, -9.1).unwrap();
        let mut invalid = new_point();
        invalid.category = "junkyard".into();
        assert!(matches!(
            create_new_point(&db, None, pos, invalid),
            Err(Error::Category)
        ));
    }
}
