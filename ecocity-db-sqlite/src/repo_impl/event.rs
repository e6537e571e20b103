use super::*;

impl<'a> EventRepo for DbReadOnly<'a> {
    fn create_event(&self, _event: &Event) -> Result<()> {
        unreachable!();
    }
    fn update_event(&self, _event: &Event) -> Result<()> {
        unreachable!();
    }
    fn delete_event(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn all_events_chronologically(&self) -> Result<Vec<Event>> {
        all_events_chronologically(&mut self.conn.borrow_mut())
    }
    fn count_events(&self) -> Result<usize> {
        count_events(&mut self.conn.borrow_mut())
    }
}

impl<'a> EventRepo for DbReadWrite<'a> {
    fn create_event(&self, event: &Event) -> Result<()> {
        create_event(&mut self.conn.borrow_mut(), event)
    }
    fn update_event(&self, event: &Event) -> Result<()> {
        update_event(&mut self.conn.borrow_mut(), event)
    }
    fn delete_event(&self, id: &str) -> Result<()> {
        delete_event(&mut self.conn.borrow_mut(), id)
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn all_events_chronologically(&self) -> Result<Vec<Event>> {
        all_events_chronologically(&mut self.conn.borrow_mut())
    }
    fn count_events(&self) -> Result<usize> {
        count_events(&mut self.conn.borrow_mut())
    }
}

impl<'a> EventRepo for DbConnection<'a> {
    fn create_event(&self, event: &Event) -> Result<()> {
        create_event(&mut self.conn.borrow_mut(), event)
    }
    fn update_event(&self, event: &Event) -> Result<()> {
        update_event(&mut self.conn.borrow_mut(), event)
    }
    fn delete_event(&self, id: &str) -> Result<()> {
        delete_event(&mut self.conn.borrow_mut(), id)
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn all_events_chronologically(&self) -> Result<Vec<Event>> {
        all_events_chronologically(&mut self.conn.borrow_mut())
    }
    fn count_events(&self) -> Result<usize> {
        count_events(&mut self.conn.borrow_mut())
    }
}

fn as_new_event(e: &Event) -> models::NewEvent {
    models::NewEvent {
        uid: e.id.as_str(),
        title: &e.title,
        description: &e.description,
        date: format_date(e.date),
        time: e.time.map(format_time),
        address: &e.address,
        organizer: &e.organizer,
        lat: e.pos.lat(),
        lng: e.pos.lng(),
        created_by: e.created_by.as_ref().map(EmailAddress::as_str),
        created_at: e.created_at.as_milliseconds(),
    }
}

fn create_event(conn: &mut SqliteConnection, e: &Event) -> Result<()> {
    let new_event = as_new_event(e);
    diesel::insert_into(schema::events::table)
        .values(&new_event)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_event(conn: &mut SqliteConnection, e: &Event) -> Result<()> {
    use schema::events::dsl;
    let new_event = as_new_event(e);
    diesel::update(dsl::events.filter(dsl::uid.eq(new_event.uid)))
        .set(&new_event)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_event(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::events::dsl;
    if diesel::delete(dsl::events.filter(dsl::uid.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?
        == 0
    {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_event(conn: &mut SqliteConnection, id: &str) -> Result<Event> {
    use schema::events::dsl;
    load_event(
        dsl::events
            .filter(dsl::uid.eq(id))
            .first::<models::EventEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn all_events_chronologically(conn: &mut SqliteConnection) -> Result<Vec<Event>> {
    use schema::events::dsl;
    // Dates and times of day are stored zero-padded, so the
    // lexicographical order is the chronological order.
    dsl::events
        .order_by((dsl::date.asc(), dsl::time.asc()))
        .load::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_event)
        .collect()
}

fn count_events(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::events::dsl;
    Ok(dsl::events
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
