use super::*;

impl<'a> PointRepo for DbReadOnly<'a> {
    fn create_point(&self, _point: &CollectionPoint) -> Result<()> {
        unreachable!();
    }
    fn update_point(&self, _point: &CollectionPoint) -> Result<()> {
        unreachable!();
    }
    fn delete_point(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_point(&self, id: &str) -> Result<CollectionPoint> {
        get_point(&mut self.conn.borrow_mut(), id)
    }
    fn all_points(&self) -> Result<Vec<CollectionPoint>> {
        all_points(&mut self.conn.borrow_mut())
    }
    fn count_points(&self) -> Result<usize> {
        count_points(&mut self.conn.borrow_mut())
    }
}

impl<'a> PointRepo for DbReadWrite<'a> {
    fn create_point(&self, point: &CollectionPoint) -> Result<()> {
        create_point(&mut self.conn.borrow_mut(), point)
    }
    fn update_point(&self, point: &CollectionPoint) -> Result<()> {
        update_point(&mut self.conn.borrow_mut(), point)
    }
    fn delete_point(&self, id: &str) -> Result<()> {
        delete_point(&mut self.conn.borrow_mut(), id)
    }

    fn get_point(&self, id: &str) -> Result<CollectionPoint> {
        get_point(&mut self.conn.borrow_mut(), id)
    }
    fn all_points(&self) -> Result<Vec<CollectionPoint>> {
        all_points(&mut self.conn.borrow_mut())
    }
    fn count_points(&self) -> Result<usize> {
        count_points(&mut self.conn.borrow_mut())
    }
}

impl<'a> PointRepo for DbConnection<'a> {
    fn create_point(&self, point: &CollectionPoint) -> Result<()> {
        create_point(&mut self.conn.borrow_mut(), point)
    }
    fn update_point(&self, point: &CollectionPoint) -> Result<()> {
        update_point(&mut self.conn.borrow_mut(), point)
    }
    fn delete_point(&self, id: &str) -> Result<()> {
        delete_point(&mut self.conn.borrow_mut(), id)
    }

    fn get_point(&self, id: &str) -> Result<CollectionPoint> {
        get_point(&mut self.conn.borrow_mut(), id)
    }
    fn all_points(&self) -> Result<Vec<CollectionPoint>> {
        all_points(&mut self.conn.borrow_mut())
    }
    fn count_points(&self) -> Result<usize> {
        count_points(&mut self.conn.borrow_mut())
    }
}

fn as_new_point(p: &CollectionPoint) -> models::NewPoint {
    models::NewPoint {
        uid: p.id.as_str(),
        name: &p.name,
        category: p.category.into(),
        lat: p.pos.lat(),
        lng: p.pos.lng(),
        description: &p.description,
        impact: &p.impact,
        address: &p.address,
        opening_hours: p.opening_hours.as_deref(),
        contact: p.contact.as_deref(),
        website: p.website.as_deref(),
        created_by: p.created_by.as_ref().map(EmailAddress::as_str),
        created_at: p.created_at.as_milliseconds(),
    }
}

fn create_point(conn: &mut SqliteConnection, p: &CollectionPoint) -> Result<()> {
    let new_point = as_new_point(p);
    diesel::insert_into(schema::points::table)
        .values(&new_point)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_point(conn: &mut SqliteConnection, p: &CollectionPoint) -> Result<()> {
    use schema::points::dsl;
    let new_point = as_new_point(p);
    diesel::update(dsl::points.filter(dsl::uid.eq(new_point.uid)))
        .set(&new_point)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_point(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::points::dsl;
    if diesel::delete(dsl::points.filter(dsl::uid.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?
        == 0
    {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_point(conn: &mut SqliteConnection, id: &str) -> Result<CollectionPoint> {
    use schema::points::dsl;
    load_point(
        dsl::points
            .filter(dsl::uid.eq(id))
            .first::<models::PointEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn all_points(conn: &mut SqliteConnection) -> Result<Vec<CollectionPoint>> {
    use schema::points::dsl;
    dsl::points
        .order_by(dsl::name.asc())
        .load::<models::PointEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_point)
        .collect()
}

fn count_points(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::points::dsl;
    Ok(dsl::points
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
