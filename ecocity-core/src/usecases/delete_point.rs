use super::prelude::*;

pub fn delete_point<R: PointRepo>(repo: &R, id: &str) -> Result<()> {
    log::info!("Deleting collection point {id}");
    Ok(repo.delete_point(id)?)
}
