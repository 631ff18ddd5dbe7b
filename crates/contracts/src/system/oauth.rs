use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Параметры, с которыми Shopify возвращает пользователя на callback
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OAuthCallbackQuery {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub shop: Option<String>,
}

/// Тело запроса обмена кода на access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenRequest {
    pub client_id: String,
    pub client_secret: String,
    pub code: String,
}

/// Ответ Shopify на обмен кода
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Состояние авторизации магазина
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationStatus {
    pub is_authorized: bool,
    pub authorized_at: Option<DateTime<Utc>>,
}
