use super::prelude::*;

/// Filter published points by category and free text.
///
/// The text filter matches case-insensitively against name, description
/// and address. The input order is preserved.
pub fn visible_points(
    points: Vec<CollectionPoint>,
    category: Option<PointCategory>,
    text: Option<&str>,
) -> Vec<CollectionPoint> {
    let text = text.map(str::trim).filter(|t| !t.is_empty());
    if category.is_none() && text.is_none() {
        return points;
    }
    let needle = text.map(str::to_lowercase);
    points
        .into_iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .filter(|p| {
            needle.as_deref().map_or(true, |needle| {
                p.name.to_lowercase().contains(needle)
                    || p.description.to_lowercase().contains(needle)
                    || p.address.to_lowercase().contains(needle)
            })
        })
        .collect()
}
