//! Fetchers for the backend catalog API.

pub mod categories;
pub mod products;

use crate::error::{CatalogError, Result};
use crate::locale::Locale;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Builds the default headers for the client.
fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Client for the locale-scoped `/api/{locale}/...` endpoints.
#[derive(Debug, Clone)]
pub struct CatalogApi {
    client: Client,
    base: Url,
    max_pages: usize,
}

impl CatalogApi {
    /// `base` is the backend root, e.g. `http://localhost:8000/`.
    /// `max_pages` bounds how many `next` links one product load follows.
    pub fn new(base: Url, max_pages: usize) -> Result<Self> {
        let client = Client::builder()
            .default_headers(build_headers())
            .build()
            .map_err(|source| CatalogError::Transport {
                url: base.to_string(),
                source,
            })?;
        Ok(CatalogApi {
            client,
            base: with_trailing_slash(base),
            max_pages: max_pages.max(1),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    pub fn categories_url(&self, locale: Locale) -> Result<Url> {
        self.endpoint(&format!("api/{locale}/product-categories/"))
    }

    pub fn products_url(&self, locale: Locale) -> Result<Url> {
        self.endpoint(&format!("api/{locale}/products/"))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|source| CatalogError::InvalidUrl {
                url: path.to_string(),
                source,
            })
    }

    /// GETs `url` and parses the body as JSON. Any non-2xx status is an error.
    async fn get_json(&self, url: &Url, locale: Locale) -> Result<Value> {
        let response = self
            .client
            .get(url.clone())
            .header(header::ACCEPT_LANGUAGE, locale.code())
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| CatalogError::Transport {
                url: url.to_string(),
                source,
            })?;
        serde_json::from_str(&body).map_err(|source| CatalogError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Deserializes each item, skipping the ones that do not fit `T`.
fn parse_items<T: DeserializeOwned>(items: Vec<Value>, url: &Url) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "skipping malformed list item");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> CatalogApi {
        CatalogApi::new(Url::parse(base).unwrap(), 10).unwrap()
    }

    #[test]
    fn test_endpoints_are_locale_scoped() {
        let api = api("http://localhost:8000");
        assert_eq!(
            api.products_url(Locale::Ru).unwrap().as_str(),
            "http://localhost:8000/api/ru/products/"
        );
        assert_eq!(
            api.categories_url(Locale::Uz).unwrap().as_str(),
            "http://localhost:8000/api/uz/product-categories/"
        );
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        let api = api("http://example.com/backend");
        assert_eq!(
            api.products_url(Locale::En).unwrap().as_str(),
            "http://example.com/backend/api/en/products/"
        );
    }

    #[test]
    fn test_max_pages_at_least_one() {
        let api = CatalogApi::new(Url::parse("http://localhost/").unwrap(), 0).unwrap();
        assert_eq!(api.max_pages(), 1);
    }
}
