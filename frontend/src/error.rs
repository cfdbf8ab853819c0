use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP error! status: {status}")]
    Status { url: String, status: StatusCode },

    #[error("Request error: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Stopped after {0} pages, the `next` chain never ended")]
    PageLimit(usize),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Non-success status, transport failure or an unfollowable URL.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            CatalogError::Status { .. }
                | CatalogError::Transport { .. }
                | CatalogError::InvalidUrl { .. }
        )
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, CatalogError::Decode { .. })
    }

    /// URL of the request that failed, when there is one.
    pub fn url(&self) -> Option<&str> {
        match self {
            CatalogError::Status { url, .. }
            | CatalogError::Transport { url, .. }
            | CatalogError::Decode { url, .. }
            | CatalogError::InvalidUrl { url, .. } => Some(url),
            CatalogError::PageLimit(_) | CatalogError::Config(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
