use chrono::{DateTime, Duration, Utc};
use contracts::system::oauth::AuthorizationStatus;
use std::collections::HashMap;
use std::sync::RwLock;

/// Сколько живёт выданный `state`
const STATE_TTL_MINUTES: i64 = 10;

/// Предел незавершённых авторизаций, при превышении вытесняются самые старые
const MAX_PENDING_STATES: usize = 256;

/// In-memory хранилище access token магазина
///
/// Токен живёт до перезапуска процесса. Здесь же хранятся выданные,
/// но ещё не использованные значения `state` для OAuth callback.
pub struct TokenStore {
    inner: RwLock<TokenState>,
}

#[derive(Default)]
struct TokenState {
    access_token: Option<String>,
    authorized_at: Option<DateTime<Utc>>,
    /// Выданные `state` и время выдачи
    pending_states: HashMap<String, DateTime<Utc>>,
}

impl TokenState {
    fn prune_states(&mut self, now: DateTime<Utc>) {
        let expires_before = now - Duration::minutes(STATE_TTL_MINUTES);
        self.pending_states
            .retain(|_, issued_at| *issued_at > expires_before);

        while self.pending_states.len() >= MAX_PENDING_STATES {
            let Some(oldest) = self
                .pending_states
                .iter()
                .min_by_key(|(_, issued_at)| **issued_at)
                .map(|(nonce, _)| nonce.clone())
            else {
                break;
            };
            self.pending_states.remove(&oldest);
        }
    }
}

impl TokenStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(TokenState::default()),
        }
    }

    /// Хранилище с заранее выданным токеном (пустая строка - без токена)
    pub fn with_access_token(token: &str) -> Self {
        let store = Self::new();
        if !token.trim().is_empty() {
            store.set_access_token(token.trim().to_string());
        }
        store
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner.read().unwrap().access_token.clone()
    }

    pub fn set_access_token(&self, token: String) {
        let mut state = self.inner.write().unwrap();
        state.access_token = Some(token);
        state.authorized_at = Some(Utc::now());
    }

    pub fn status(&self) -> AuthorizationStatus {
        let state = self.inner.read().unwrap();
        AuthorizationStatus {
            is_authorized: state.access_token.is_some(),
            authorized_at: state.authorized_at,
        }
    }

    /// Выдать новое значение `state` для ссылки авторизации
    ///
    /// Попутно удаляет просроченные значения и держит их число в пределах
    /// `MAX_PENDING_STATES`.
    pub fn issue_state(&self) -> String {
        let nonce = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();
        let mut state = self.inner.write().unwrap();
        state.prune_states(now);
        state.pending_states.insert(nonce.clone(), now);
        nonce
    }

    /// Проверить и погасить `state`, пришедший в callback
    pub fn consume_state(&self, state: &str) -> bool {
        let mut inner = self.inner.write().unwrap();
        inner.prune_states(Utc::now());
        inner.pending_states.remove(state).is_some()
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
