use crate::error::{CatalogError, Result};
use crate::locale::Locale;
use reqwest::Url;
use std::env;
use std::str::FromStr;

/// Runtime settings, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend root the `/api/{locale}/...` paths hang off.
    pub api: Url,
    pub host: String,
    pub port: u16,
    /// Site-wide language, checked after the page's own `lang`.
    pub language_code: Option<Locale>,
    pub page_size: usize,
    pub brand_page_size: usize,
    pub max_pages: usize,
    pub site_name: String,
    pub templates: String,
    pub static_dir: String,
    pub static_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let api = get("API", "http://localhost:8000");
        let api = Url::parse(&api)
            .map_err(|e| CatalogError::Config(format!("API is not a valid URL ({api}): {e}")))?;

        let language_code = match lookup("LANGUAGE_CODE") {
            Some(code) if !code.trim().is_empty() => Some(Locale::from_code(&code).ok_or_else(
                || CatalogError::Config(format!("LANGUAGE_CODE {code:?} is not one of uz, ru, en")),
            )?),
            _ => None,
        };

        let mut static_url = get("STATIC_URL", "/static/");
        if !static_url.ends_with('/') {
            static_url.push('/');
        }

        Ok(Config {
            api,
            host: get("HOST", "127.0.0.1"),
            port: parse(&get("PORT", "8080"), "PORT")?,
            language_code,
            page_size: positive(&get("PAGE_SIZE", "8"), "PAGE_SIZE")?,
            brand_page_size: positive(&get("BRAND_PAGE_SIZE", "6"), "BRAND_PAGE_SIZE")?,
            max_pages: positive(&get("MAX_PAGES", "1000"), "MAX_PAGES")?,
            site_name: get("SITE_NAME", "Autoliga"),
            templates: get("TEMPLATES", "public/**/*.html"),
            static_dir: get("STATIC_DIR", "static"),
            static_url,
        })
    }
}

fn parse<T: FromStr>(value: &str, key: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CatalogError::Config(format!("{key} has an invalid value: {value:?}")))
}

fn positive(value: &str, key: &str) -> Result<usize> {
    match parse::<usize>(value, key)? {
        0 => Err(CatalogError::Config(format!("{key} must be greater than zero"))),
        n => Ok(n),
    }
}
