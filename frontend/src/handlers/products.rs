use super::{CatalogApi, parse_items};
use crate::error::{CatalogError, Result};
use crate::locale::Locale;
use crate::models::{ListKey, Product, list_items, next_link};
use reqwest::Url;

impl CatalogApi {
    /// Fetches every page of the product list for `locale`.
    ///
    /// Pages are requested one after another by following `next` until it is
    /// missing or `null`, and their items are concatenated in fetch order.
    /// A failure on any page fails the whole load.
    pub async fn load_products(&self, locale: Locale) -> Result<Vec<Product>> {
        let mut url = self.products_url(locale)?;
        let mut products = Vec::new();
        let mut pages = 0usize;

        loop {
            let body = self.get_json(&url, locale).await?;
            pages += 1;

            let next = next_link(&body);
            let items = list_items(body, &[ListKey::Results, ListKey::Products]);
            products.extend(parse_items::<Product>(items, &url));

            let Some(next) = next else {
                break;
            };
            if pages >= self.max_pages() {
                return Err(CatalogError::PageLimit(pages));
            }
            url = follow_next(&url, &next)?;
        }

        tracing::debug!(count = products.len(), pages, "loaded products");
        Ok(products)
    }
}

/// Resolves a `next` link against the page it came from.
///
/// Absolute links are cut down to path and query first, so the follow-up
/// request always stays on the origin of `current`.
pub fn follow_next(current: &Url, next: &str) -> Result<Url> {
    let relative = match Url::parse(next) {
        Ok(absolute) => match absolute.query() {
            Some(query) => format!("{}?{}", absolute.path(), query),
            None => absolute.path().to_string(),
        },
        Err(_) => next.to_string(),
    };
    current
        .join(&relative)
        .map_err(|source| CatalogError::InvalidUrl {
            url: next.to_string(),
            source,
        })
}
