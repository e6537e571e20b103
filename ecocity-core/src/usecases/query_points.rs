use super::prelude::*;

pub fn query_points<R: PointRepo>(repo: &R) -> Result<Vec<CollectionPoint>> {
    Ok(repo.all_points()?)
}
