use super::*;

impl<'a> PointRequestRepo for DbReadOnly<'a> {
    fn create_point_request(&self, _request: &PointRequest) -> Result<()> {
        unreachable!();
    }
    fn delete_point_request(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_point_request(&self, id: &str) -> Result<PointRequest> {
        get_point_request(&mut self.conn.borrow_mut(), id)
    }
    fn all_point_requests(&self) -> Result<Vec<PointRequest>> {
        all_point_requests(&mut self.conn.borrow_mut())
    }
    fn point_requests_created_by(&self, email: &EmailAddress) -> Result<Vec<PointRequest>> {
        point_requests_created_by(&mut self.conn.borrow_mut(), email)
    }

    fn mark_point_request_decided(
        &self,
        _id: &str,
        _status: RequestStatus,
        _decided_at: Timestamp,
        _point_id: Option<&Id>,
    ) -> Result<usize> {
        unreachable!();
    }
}

impl<'a> PointRequestRepo for DbReadWrite<'a> {
    fn create_point_request(&self, request: &PointRequest) -> Result<()> {
        create_point_request(&mut self.conn.borrow_mut(), request)
    }
    fn delete_point_request(&self, id: &str) -> Result<()> {
        delete_point_request(&mut self.conn.borrow_mut(), id)
    }

    fn get_point_request(&self, id: &str) -> Result<PointRequest> {
        get_point_request(&mut self.conn.borrow_mut(), id)
    }
    fn all_point_requests(&self) -> Result<Vec<PointRequest>> {
        all_point_requests(&mut self.conn.borrow_mut())
    }
    fn point_requests_created_by(&self, email: &EmailAddress) -> Result<Vec<PointRequest>> {
        point_requests_created_by(&mut self.conn.borrow_mut(), email)
    }

    fn mark_point_request_decided(
        &self,
        id: &str,
        status: RequestStatus,
        decided_at: Timestamp,
        point_id: Option<&Id>,
    ) -> Result<usize> {
        mark_point_request_decided(&mut self.conn.borrow_mut(), id, status, decided_at, point_id)
    }
}

impl<'a> PointRequestRepo for DbConnection<'a> {
    fn create_point_request(&self, request: &PointRequest) -> Result<()> {
        create_point_request(&mut self.conn.borrow_mut(), request)
    }
    fn delete_point_request(&self, id: &str) -> Result<()> {
        delete_point_request(&mut self.conn.borrow_mut(), id)
    }

    fn get_point_request(&self, id: &str) -> Result<PointRequest> {
        get_point_request(&mut self.conn.borrow_mut(), id)
    }
    fn all_point_requests(&self) -> Result<Vec<PointRequest>> {
        all_point_requests(&mut self.conn.borrow_mut())
    }
    fn point_requests_created_by(&self, email: &EmailAddress) -> Result<Vec<PointRequest>> {
        point_requests_created_by(&mut self.conn.borrow_mut(), email)
    }

    fn mark_point_request_decided(
        &self,
        id: &str,
        status: RequestStatus,
        decided_at: Timestamp,
        point_id: Option<&Id>,
    ) -> Result<usize> {
        mark_point_request_decided(&mut self.conn.borrow_mut(), id, status, decided_at, point_id)
    }
}

fn create_point_request(conn: &mut SqliteConnection, r: &PointRequest) -> Result<()> {
    let model = models::NewPointRequest {
        uid: r.id.as_str(),
        name: &r.name,
        category: r.category.into(),
        address: &r.address,
        description: &r.description,
        impact: &r.impact,
        status: r.status.into(),
        created_by: r.created_by.as_str(),
        created_at: r.created_at.as_milliseconds(),
        decided_at: r.decided_at.map(Timestamp::as_milliseconds),
        point_uid: r.point_id.as_ref().map(Id::as_str),
    };
    diesel::insert_into(schema::point_requests::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_point_request(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::point_requests::dsl;
    if diesel::delete(dsl::point_requests.filter(dsl::uid.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?
        == 0
    {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_point_request(conn: &mut SqliteConnection, id: &str) -> Result<PointRequest> {
    use schema::point_requests::dsl;
    load_point_request(
        dsl::point_requests
            .filter(dsl::uid.eq(id))
            .first::<models::PointRequestEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn all_point_requests(conn: &mut SqliteConnection) -> Result<Vec<PointRequest>> {
    use schema::point_requests::dsl;
    dsl::point_requests
        .order_by(dsl::created_at.desc())
        .load::<models::PointRequestEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_point_request)
        .collect()
}

fn point_requests_created_by(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Vec<PointRequest>> {
    use schema::point_requests::dsl;
    dsl::point_requests
        .filter(dsl::created_by.eq(email.as_str()))
        .order_by(dsl::created_at.desc())
        .load::<models::PointRequestEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_point_request)
        .collect()
}

// The update is guarded by the pending status. A request that has
// already been decided is left untouched and 0 is returned.
fn mark_point_request_decided(
    conn: &mut SqliteConnection,
    id: &str,
    status: RequestStatus,
    decided_at: Timestamp,
    point_id: Option<&Id>,
) -> Result<usize> {
    use schema::point_requests::dsl;
    let pending = RequestStatusPrimitive::from(RequestStatus::Pending);
    diesel::update(
        dsl::point_requests
            .filter(dsl::uid.eq(id))
            .filter(dsl::status.eq(pending)),
    )
    .set((
        dsl::status.eq(RequestStatusPrimitive::from(status)),
        dsl::decided_at.eq(Some(decided_at.as_milliseconds())),
        dsl::point_uid.eq(point_id.map(Id::as_str)),
    ))
    .execute(conn)
    .map_err(from_diesel_err)
}
