use crate::models::Product;

/// Normalizes raw search input the way it is compared against titles.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Products matching an optional category slug and a title search.
///
/// The category check is exact and case-sensitive; products without a
/// category never match an active category filter. The search is a
/// case-insensitive substring match on the display title, applied to the
/// category subset. An empty slug or a blank query is no constraint.
pub fn compute_visible(all: &[Product], category: Option<&str>, query: &str) -> Vec<Product> {
    let category = category.filter(|slug| !slug.is_empty());
    let query = normalize_query(query);

    all.iter()
        .filter(|product| match category {
            Some(slug) => product.category_slug() == Some(slug),
            None => true,
        })
        .filter(|product| {
            query.is_empty()
                || product
                    .display_title()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&query)
        })
        .cloned()
        .collect()
}
