use super::prelude::*;

pub fn query_events<R: EventRepo>(repo: &R) -> Result<Vec<Event>> {
    Ok(repo.all_events_chronologically()?)
}
