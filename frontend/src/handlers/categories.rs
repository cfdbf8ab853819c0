use super::{CatalogApi, parse_items};
use crate::error::Result;
use crate::locale::Locale;
use crate::models::{Category, ListKey, list_items};

impl CatalogApi {
    /// Fetches the category list for `locale` in one request.
    ///
    /// Accepts `{"results": [...]}` or a bare array. Any other JSON shape
    /// yields an empty list; only transport, HTTP status and non-JSON bodies
    /// are errors.
    pub async fn load_categories(&self, locale: Locale) -> Result<Vec<Category>> {
        let url = self.categories_url(locale)?;
        let body = self.get_json(&url, locale).await?;
        let categories: Vec<Category> = parse_items(list_items(body, &[ListKey::Results]), &url);
        tracing::debug!(count = categories.len(), url = %url, "loaded categories");
        Ok(categories)
    }
}
