use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub shopify: ShopifySettings,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Настройки подключения к магазину Shopify
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ShopifySettings {
    /// Адрес магазина, например https://example.myshopify.com
    pub shop_url: String,
    pub api_version: String,
    pub client_id: String,
    pub client_secret: String,
    pub scopes: String,
    pub redirect_uri: String,
    /// Токен, выданный заранее (custom app). Пустая строка - ждём OAuth
    pub access_token: String,
}

/// Ограничения обхода каталога
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Таймаут одного HTTP запроса
    pub request_timeout_secs: u64,
    /// Общий дедлайн на обход всех страниц
    pub fetch_timeout_secs: u64,
    pub max_pages: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for ShopifySettings {
    fn default() -> Self {
        Self {
            shop_url: "https://example.myshopify.com".to_string(),
            api_version: "2024-01".to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            scopes: "read_products,write_products".to_string(),
            redirect_uri: "http://localhost:3000/api/oauth/callback".to_string(),
            access_token: String::new(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            fetch_timeout_secs: 120,
            max_pages: 1000,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address {}:{}: {}", self.host, self.port, e))?;
        Ok(addr)
    }
}

impl CatalogConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory
/// 3. Falls back to built-in defaults
pub fn load_config() -> anyhow::Result<Config> {
    for config_path in candidate_paths() {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            return load_from_file(&config_path);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::warn!("config.toml not found, using default configuration");
    Ok(Config::default())
}

pub fn load_from_file(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("config.toml"));
        }
    }
    paths.push(PathBuf::from("config.toml"));
    paths
}

/// Сохранить загруженную конфигурацию для всего процесса
pub fn init(config: Config) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Configuration already initialized, keeping the first one");
    }
}

/// Текущая конфигурация (значения по умолчанию, если init не вызывался)
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
