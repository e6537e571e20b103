use super::prelude::*;

pub fn delete_point_request<R: PointRequestRepo>(repo: &R, request_id: &str) -> Result<()> {
    log::info!("Deleting point request {request_id}");
    Ok(repo.delete_point_request(request_id)?)
}

pub fn delete_event_request<R: EventRequestRepo>(repo: &R, request_id: &str) -> Result<()> {
    log::info!("Deleting event request {request_id}");
    Ok(repo.delete_event_request(request_id)?)
}
