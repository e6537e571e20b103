use super::{create_point::NewPoint, prelude::*};
use crate::util::validate;

/// Replace the descriptive fields of a published collection point.
///
/// The id, creator and creation time are kept, everything else is taken
/// from the submitted values.
pub fn update_point<R: PointRepo>(
    repo: &R,
    id: &str,
    pos: MapPoint,
    update: NewPoint,
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
    } = update;
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
    let old = repo.get_point(id)?;
    let point = CollectionPoint {
        id: old.id,
        name: name.trim().to_string(),
        category,
        pos,
        description: description.trim().to_string(),
        impact: impact.trim().to_string(),
        address: address.trim().to_string(),
        opening_hours: opening_hours.filter(|s| !s.trim().is_empty()),
        contact: contact.filter(|s| !s.trim().is_empty()),
        website: website.filter(|s| !s.trim().is_empty()),
        created_by: old.created_by,
        created_at: old.created_at,
    };
    log::debug!("Updating collection point {}", point.id);
    repo.update_point(&point)?;
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::RepoError;

    fn published_point(db: &MockDb) -> CollectionPoint {
        let pos = MapPoint::try_from_lat_lng_deg(38.7, -9.1).unwrap();
        super::super::create_new_point(
            db,
            Some("maria@example.org".parse().unwrap()),
            pos,
            NewPoint {
                name: "Ecoponto Centro".into(),
                category: "recycling-point".into(),
                address: "Rua das Flores 1".into(),
                description: "Recolha de vidro".into(),
                impact: String::new(),
                opening_hours: None,
                contact: None,
                website: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn edit_keeps_creator_and_creation_time() {
        let db = MockDb::default();
        let old = published_point(&db);
        let new_pos = MapPoint::try_from_lat_lng_deg(38.8, -9.2).unwrap();

        let updated = update_point(
            &db,
            old.id.as_ref(),
            new_pos,
            NewPoint {
                name: "Ecoponto Centro Renovado".into(),
                category: "recycling-center".into(),
                address: "Rua das Flores 2".into(),
                description: "Agora com recolha de pilhas".into(),
                impact: "2t/ano".into(),
                opening_hours: Some("seg-sab 8h-20h".into()),
                contact: None,
                website: None,
            },
        )
        .unwrap();

        assert_eq!(old.id, updated.id);
        assert_eq!(old.created_by, updated.created_by);
        assert_eq!(old.created_at, updated.created_at);
        assert_eq!("Ecoponto Centro Renovado", updated.name);
        assert_eq!(PointCategory::RecyclingCenter, updated.category);
        assert_eq!(new_pos, updated.pos);
        assert_eq!(1, db.points.borrow().len());
        assert_eq!("Rua das Flores 2", db.points.borrow()[0].address);
    }

    #[test]
    fn blank_name_is_rejected_without_write() {
        let db = MockDb::default();
        let old = published_point(&db);
        let pos = old.pos;

        assert!(matches!(
            update_point(
                &db,
                old.id.as_ref(),
                pos,
                NewPoint {
                    name: "   ".into(),
                    category: "recycling-point".into(),
                    address: "Rua das Flores 1".into(),
                    description: "Recolha de vidro".into(),
                    impact: String::new(),
                    opening_hours: None,
                    contact: None,
                    website: None,
                },
            ),
            Err(Error::Name)
        ));
        assert_eq!("Ecoponto Centro", db.points.borrow()[0].name);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let db = MockDb::default();
        let pos = MapPoint::try_from_lat_lng_deg(38.7, -9.1).unwrap();
        assert!(matches!(
            update_point(
                &db,
                "no-such-id",
                pos,
                NewPoint {
                    name: "Ecoponto".into(),
                    category: "recycling-point".into(),
                    address: "Rua A".into(),
                    description: "d".into(),
                    impact: String::new(),
                    opening_hours: None,
                    contact: None,
                    website: None,
                },
            ),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
