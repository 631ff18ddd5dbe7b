//! OAuth-авторизация приложения в магазине Shopify

pub mod service;
pub mod token_store;

pub use token_store::TokenStore;

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::shared::config;

static TOKEN_STORE: Lazy<Arc<TokenStore>> = Lazy::new(|| {
    Arc::new(TokenStore::with_access_token(
        &config::get().shopify.access_token,
    ))
});

/// Хранилище токена, общее для всего процесса
pub fn token_store() -> Arc<TokenStore> {
    TOKEN_STORE.clone()
}
