use super::prelude::*;

pub fn delete_event<R: EventRepo>(repo: &R, id: &str) -> Result<()> {
    log::info!("Deleting event {id}");
    Ok(repo.delete_event(id)?)
}
