use thiserror::Error;

/// Ошибки работы с Shopify Admin API
#[derive(Debug, Error)]
pub enum ShopifyError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch products. Status: {status}, Error: {body}")]
    CatalogFetch { status: u16, body: String },

    #[error("Failed to parse Shopify response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unreadable Link header on catalog page {url}")]
    InvalidLinkHeader { url: String },

    #[error("Catalog fetch did not finish within {secs}s")]
    CatalogTimeout { secs: u64 },

    #[error("Catalog pagination exceeded {max_pages} pages")]
    PaginationLimit { max_pages: usize },

    #[error("Error fetching access token: {body}")]
    TokenExchange { status: u16, body: String },

    #[error("Shopify access token is missing, complete OAuth authorization first")]
    NotAuthorized,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
