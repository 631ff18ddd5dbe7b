use contracts::system::oauth::{AccessTokenRequest, AccessTokenResponse};
use contracts::usecases::u508_create_shopify_product::ProductDto;
use reqwest::header::{ACCEPT, LINK};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ShopifyError;
use super::link_header::next_page_url;
use super::ACCESS_TOKEN_HEADER;
use crate::shared::config::{CatalogConfig, ShopifySettings};

/// HTTP-клиент для работы с Shopify Admin REST API
///
/// Один экземпляр разделяется между запросами: внутри reqwest держит пул
/// соединений, другого изменяемого состояния у клиента нет.
pub struct ShopifyApiClient {
    client: reqwest::Client,
    shop_url: String,
    api_version: String,
    fetch_timeout: Duration,
    max_pages: usize,
}

impl ShopifyApiClient {
    pub fn new(settings: &ShopifySettings, catalog: &CatalogConfig) -> Result<Self, ShopifyError> {
        let shop_url = settings.shop_url.trim().trim_end_matches('/').to_string();
        reqwest::Url::parse(&shop_url).map_err(|e| {
            ShopifyError::InvalidConfig(format!("shop_url '{}' is not a valid URL: {}", shop_url, e))
        })?;
        if settings.api_version.trim().is_empty() {
            return Err(ShopifyError::InvalidConfig(
                "api_version must not be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(catalog.request_timeout())
            .build()?;

        Ok(Self {
            client,
            shop_url,
            api_version: settings.api_version.trim().to_string(),
            fetch_timeout: catalog.fetch_timeout(),
            max_pages: catalog.max_pages,
        })
    }

    pub fn shop_url(&self) -> &str {
        &self.shop_url
    }

    /// Полный адрес ресурса Admin API, например `.../admin/api/2024-01/products.json`
    pub fn request_url(&self, endpoint: &str) -> String {
        format!(
            "{}/admin/api/{}/{}",
            self.shop_url,
            self.api_version,
            endpoint.trim_start_matches('/')
        )
    }

    /// Получить все SKU магазина, пройдя каталог `products.json` до конца
    ///
    /// Каталог каждый раз читается заново, без кэша. Ошибка на любой странице
    /// (статус, сеть, JSON) или истечение общего дедлайна прерывает обход,
    /// частичный список не возвращается.
    pub async fn fetch_all_skus(&self, access_token: &str) -> Result<Vec<String>, ShopifyError> {
        tracing::info!("Fetching existing SKUs from Shopify");

        let result = match tokio::time::timeout(self.fetch_timeout, self.walk_catalog(access_token))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(ShopifyError::CatalogTimeout {
                secs: self.fetch_timeout.as_secs(),
            }),
        };

        match result {
            Ok(skus) => {
                tracing::info!("Fetched {} SKUs successfully", skus.len());
                Ok(skus)
            }
            Err(e) => {
                tracing::error!("An error occurred while fetching SKUs: {}", e);
                Err(e)
            }
        }
    }

    async fn walk_catalog(&self, access_token: &str) -> Result<Vec<String>, ShopifyError> {
        let mut skus = Vec::new();
        let mut next_url = Some(self.request_url("products.json"));
        let mut page_count = 0usize;

        while let Some(url) = next_url {
            page_count += 1;
            if page_count > self.max_pages {
                return Err(ShopifyError::PaginationLimit {
                    max_pages: self.max_pages,
                });
            }

            let page = self.fetch_products_page(&url, access_token).await?;
            let before = skus.len();
            for product in page.products {
                // null SKU попадает в список как пустая строка
                skus.extend(product.variants.into_iter().map(|v| v.sku.unwrap_or_default()));
            }
            tracing::debug!(
                "Catalog page {}: {} SKUs, next page: {}",
                page_count,
                skus.len() - before,
                page.next_page_url.is_some()
            );

            next_url = page.next_page_url;
        }

        Ok(skus)
    }

    /// Одна страница каталога вместе с курсором на следующую
    pub async fn fetch_products_page(
        &self,
        url: &str,
        access_token: &str,
    ) -> Result<CatalogPage, ShopifyError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCESS_TOKEN_HEADER, access_token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ShopifyError::CatalogFetch {
                status: status.as_u16(),
                body,
            });
        }

        // Нечитаемый Link нельзя считать последней страницей: каталог был бы неполным
        let link_header = match response.headers().get(LINK) {
            Some(value) => match value.to_str() {
                Ok(value) => Some(value.to_string()),
                Err(_) => {
                    return Err(ShopifyError::InvalidLinkHeader {
                        url: url.to_string(),
                    })
                }
            },
            None => None,
        };

        let body = response.text().await?;
        let data: ShopifyProductsResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Shopify products page: {}", e);
            tracing::debug!("Response preview: {}", preview(&body));
            ShopifyError::Decode(e)
        })?;

        Ok(CatalogPage {
            products: data.products,
            next_page_url: next_page_url(link_header.as_deref()),
        })
    }

    /// Создать товар через `POST products.json`
    ///
    /// Отказ Shopify (не-2xx) возвращается как `SubmitReply::Rejected`,
    /// ошибкой считаются только сбои сети и разбора ответа.
    pub async fn create_product(
        &self,
        access_token: &str,
        product: &ProductDto,
    ) -> Result<SubmitReply, ShopifyError> {
        let url = self.request_url("products.json");
        let payload = CreateProductPayload { product };

        let response = self
            .client
            .post(&url)
            .header(ACCESS_TOKEN_HEADER, access_token)
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("Failed to create product: {}", body);
            return Ok(SubmitReply::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        // Товар уже создан, поэтому непонятный ответ не превращается в ошибку
        let created = match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => value.get("product").cloned().unwrap_or(value),
            Err(e) => {
                tracing::warn!("Product created, but the response is not JSON: {}", e);
                if body.trim().is_empty() {
                    serde_json::Value::Null
                } else {
                    serde_json::Value::String(body)
                }
            }
        };
        Ok(SubmitReply::Created(created))
    }

    /// Обменять код авторизации OAuth на постоянный access token
    pub async fn exchange_code(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
    ) -> Result<AccessTokenResponse, ShopifyError> {
        let url = format!("{}/admin/oauth/access_token", self.shop_url);
        let request = AccessTokenRequest {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            code: code.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ShopifyError::TokenExchange {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn preview(body: &str) -> String {
    let preview: String = body.chars().take(500).collect();
    if preview.len() < body.len() {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// Результат отправки товара
#[derive(Debug, Clone)]
pub enum SubmitReply {
    Created(serde_json::Value),
    Rejected { status: u16, body: String },
}

/// Страница каталога (существует только во время обхода)
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub products: Vec<ShopifyProduct>,
    pub next_page_url: Option<String>,
}

#[derive(Serialize)]
struct CreateProductPayload<'a> {
    product: &'a ProductDto,
}

// ============================================================================
// Response structures для Shopify Admin API
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyProductsResponse {
    pub products: Vec<ShopifyProduct>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyProduct {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub variants: Vec<ShopifyVariant>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyVariant {
    pub id: i64,
    #[serde(default)]
    pub sku: Option<String>,
    /// Цена приходит строкой, например "19.99"
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub inventory_quantity: i32,
}
