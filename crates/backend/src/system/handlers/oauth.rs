use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use contracts::system::oauth::{AuthorizationStatus, OAuthCallbackQuery};

use crate::shared::config;
use crate::shared::marketplaces::shopify::{self, ShopifyError};
use crate::system::oauth::{self, service::OAuthError};

/// GET /api/oauth/authorize
///
/// Перенаправляет оператора в админку Shopify для выдачи доступа
pub async fn authorize() -> Redirect {
    let state = oauth::token_store().issue_state();
    Redirect::to(&oauth::service::authorize_url(&config::get().shopify, &state))
}

/// Куда отправить оператора после успешной авторизации
const AUTHORIZED_REDIRECT: &str = "/api/oauth/status";

/// GET /api/oauth/callback
pub async fn callback(Query(query): Query<OAuthCallbackQuery>) -> Response {
    let client = match shopify::client() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Shopify client is not available: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    let result = oauth::service::complete_authorization(
        &client,
        &config::get().shopify,
        &oauth::token_store(),
        &query,
    )
    .await;

    callback_response(result)
}

/// GET /api/oauth/status
pub async fn status() -> Json<AuthorizationStatus> {
    Json(oauth::token_store().status())
}

fn callback_response(result: Result<(), OAuthError>) -> Response {
    match result {
        Ok(()) => Redirect::to(AUTHORIZED_REDIRECT).into_response(),
        Err(e) => callback_error_response(e),
    }
}

fn callback_error_response(error: OAuthError) -> Response {
    let status = match &error {
        OAuthError::MissingCode | OAuthError::InvalidState => StatusCode::BAD_REQUEST,
        OAuthError::Shopify(ShopifyError::TokenExchange { status, .. }) => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        OAuthError::EmptyToken | OAuthError::Shopify(_) => StatusCode::BAD_GATEWAY,
    };
    tracing::error!("OAuth callback failed: {}", error);
    (status, error.to_string()).into_response()
}
