use super::*;

impl<'a> EventRequestRepo for DbReadOnly<'a> {
    fn create_event_request(&self, _request: &EventRequest) -> Result<()> {
        unreachable!();
    }
    fn delete_event_request(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_event_request(&self, id: &str) -> Result<EventRequest> {
        get_event_request(&mut self.conn.borrow_mut(), id)
    }
    fn all_event_requests(&self) -> Result<Vec<EventRequest>> {
        all_event_requests(&mut self.conn.borrow_mut())
    }
    fn event_requests_created_by(&self, email: &EmailAddress) -> Result<Vec<EventRequest>> {
        event_requests_created_by(&mut self.conn.borrow_mut(), email)
    }

    fn mark_event_request_decided(
        &self,
        _id: &str,
        _status: RequestStatus,
        _decided_at: Timestamp,
        _event_id: Option<&Id>,
    ) -> Result<usize> {
        unreachable!();
    }
}

impl<'a> EventRequestRepo for DbReadWrite<'a> {
    fn create_event_request(&self, request: &EventRequest) -> Result<()> {
        create_event_request(&mut self.conn.borrow_mut(), request)
    }
    fn delete_event_request(&self, id: &str) -> Result<()> {
        delete_event_request(&mut self.conn.borrow_mut(), id)
    }

    fn get_event_request(&self, id: &str) -> Result<EventRequest> {
        get_event_request(&mut self.conn.borrow_mut(), id)
    }
    fn all_event_requests(&self) -> Result<Vec<EventRequest>> {
        all_event_requests(&mut self.conn.borrow_mut())
    }
    fn event_requests_created_by(&self, email: &EmailAddress) -> Result<Vec<EventRequest>> {
        event_requests_created_by(&mut self.conn.borrow_mut(), email)
    }

    fn mark_event_request_decided(
        &self,
        id: &str,
        status: RequestStatus,
        decided_at: Timestamp,
        event_id: Option<&Id>,
    ) -> Result<usize> {
        mark_event_request_decided(&mut self.conn.borrow_mut(), id, status, decided_at, event_id)
    }
}

impl<'a> EventRequestRepo for DbConnection<'a> {
    fn create_event_request(&self, request: &EventRequest) -> Result<()> {
        create_event_request(&mut self.conn.borrow_mut(), request)
    }
    fn delete_event_request(&self, id: &str) -> Result<()> {
        delete_event_request(&mut self.conn.borrow_mut(), id)
    }

    fn get_event_request(&self, id: &str) -> Result<EventRequest> {
        get_event_request(&mut self.conn.borrow_mut(), id)
    }
    fn all_event_requests(&self) -> Result<Vec<EventRequest>> {
        all_event_requests(&mut self.conn.borrow_mut())
    }
    fn event_requests_created_by(&self, email: &EmailAddress) -> Result<Vec<EventRequest>> {
        event_requests_created_by(&mut self.conn.borrow_mut(), email)
    }

    fn mark_event_request_decided(
        &self,
        id: &str,
        status: RequestStatus,
        decided_at: Timestamp,
        event_id: Option<&Id>,
    ) -> Result<usize> {
        mark_event_request_decided(&mut self.conn.borrow_mut(), id, status, decided_at, event_id)
    }
}

fn create_event_request(conn: &mut SqliteConnection, r: &EventRequest) -> Result<()> {
    let model = models::NewEventRequest {
        uid: r.id.as_str(),
        title: &r.title,
        description: &r.description,
        date: format_date(r.date),
        time: r.time.map(format_time),
        address: &r.address,
        organizer: &r.organizer,
        status: r.status.into(),
        created_by: r.created_by.as_str(),
        created_at: r.created_at.as_milliseconds(),
        decided_at: r.decided_at.map(Timestamp::as_milliseconds),
        event_uid: r.event_id.as_ref().map(Id::as_str),
    };
    diesel::insert_into(schema::event_requests::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_event_request(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::event_requests::dsl;
    if diesel::delete(dsl::event_requests.filter(dsl::uid.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?
        == 0
    {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_event_request(conn: &mut SqliteConnection, id: &str) -> Result<EventRequest> {
    use schema::event_requests::dsl;
    load_event_request(
        dsl::event_requests
            .filter(dsl::uid.eq(id))
            .first::<models::EventRequestEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn all_event_requests(conn: &mut SqliteConnection) -> Result<Vec<EventRequest>> {
    use schema::event_requests::dsl;
    dsl::event_requests
        .order_by(dsl::created_at.desc())
        .load::<models::EventRequestEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_event_request)
        .collect()
}

fn event_requests_created_by(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Vec<EventRequest>> {
    use schema::event_requests::dsl;
    dsl::event_requests
        .filter(dsl::created_by.eq(email.as_str()))
        .order_by(dsl::created_at.desc())
        .load::<models::EventRequestEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_event_request)
        .collect()
}

// See mark_point_request_decided.
fn mark_event_request_decided(
    conn: &mut SqliteConnection,
    id: &str,
    status: RequestStatus,
    decided_at: Timestamp,
    event_id: Option<&Id>,
) -> Result<usize> {
    use schema::event_requests::dsl;
    let pending = RequestStatusPrimitive::from(RequestStatus::Pending);
    diesel::update(
        dsl::event_requests
            .filter(dsl::uid.eq(id))
            .filter(dsl::status.eq(pending)),
    )
    .set((
        dsl::status.eq(RequestStatusPrimitive::from(status)),
        dsl::decided_at.eq(Some(decided_at.as_milliseconds())),
        dsl::event_uid.eq(event_id.map(Id::as_str)),
    ))
    .execute(conn)
    .map_err(from_diesel_err)
}
