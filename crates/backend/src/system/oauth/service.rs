use contracts::system::oauth::OAuthCallbackQuery;
use thiserror::Error;

use super::TokenStore;
use crate::shared::config::ShopifySettings;
use crate::shared::marketplaces::shopify::{ShopifyApiClient, ShopifyError};

#[derive(Debug, Error)]
pub enum OAuthError {
    #[error("Authorization code is missing.")]
    MissingCode,

    #[error("Invalid OAuth state.")]
    InvalidState,

    #[error("Shopify returned an empty access token.")]
    EmptyToken,

    #[error(transparent)]
    Shopify(#[from] ShopifyError),
}

/// Ссылка на страницу подтверждения доступа в админке Shopify
pub fn authorize_url(settings: &ShopifySettings, state: &str) -> String {
    format!(
        "{}/admin/oauth/authorize?client_id={}&scope={}&redirect_uri={}&state={}",
        settings.shop_url.trim().trim_end_matches('/'),
        urlencoding::encode(&settings.client_id),
        urlencoding::encode(&settings.scopes),
        urlencoding::encode(&settings.redirect_uri),
        urlencoding::encode(state),
    )
}

/// Обработать возврат из Shopify: проверить state, обменять код на токен
/// и сохранить его
pub async fn complete_authorization(
    client: &ShopifyApiClient,
    settings: &ShopifySettings,
    store: &TokenStore,
    query: &OAuthCallbackQuery,
) -> Result<(), OAuthError> {
    let code = match query.code.as_deref().map(str::trim) {
        Some(code) if !code.is_empty() => code,
        _ => return Err(OAuthError::MissingCode),
    };

    if let Some(state) = query.state.as_deref() {
        if !store.consume_state(state) {
            tracing::warn!("OAuth callback with unknown state");
            return Err(OAuthError::InvalidState);
        }
    }

    let token = client
        .exchange_code(&settings.client_id, &settings.client_secret, code)
        .await?;

    if token.access_token.trim().is_empty() {
        return Err(OAuthError::EmptyToken);
    }

    store.set_access_token(token.access_token);
    tracing::info!(
        "Shop {} authorized, scopes: {}",
        client.shop_url(),
        token.scope.as_deref().unwrap_or("-")
    );
    Ok(())
}
