pub mod api_client;
pub mod error;
pub mod link_header;

#[cfg(test)]
pub mod mock_shop;

pub use api_client::{ShopifyApiClient, SubmitReply};
pub use error::ShopifyError;

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::shared::config;

/// Заголовок авторизации Shopify Admin API
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

static API_CLIENT: OnceCell<Arc<ShopifyApiClient>> = OnceCell::new();

/// Общий клиент Shopify, собранный из текущей конфигурации
pub fn client() -> Result<Arc<ShopifyApiClient>, ShopifyError> {
    API_CLIENT
        .get_or_try_init(|| {
            let config = config::get();
            ShopifyApiClient::new(&config.shopify, &config.catalog).map(Arc::new)
        })
        .cloned()
}
