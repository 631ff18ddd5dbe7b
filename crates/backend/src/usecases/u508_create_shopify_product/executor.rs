use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_create_shopify_product::{CreateShopifyProduct, ProductDto};
use std::sync::Arc;

use super::validation::{validate_product, KnownSkus};
use crate::shared::marketplaces::shopify::{ShopifyApiClient, ShopifyError, SubmitReply};
use crate::system::oauth::TokenStore;

/// Итог попытки создать товар
#[derive(Debug, Clone)]
pub enum CreateProductOutcome {
    /// Товар создан, значение - ответ Shopify
    Created(serde_json::Value),
    /// Локальная проверка не пройдена, в Shopify ничего не отправлялось
    Invalid(Vec<String>),
    /// Shopify отклонил создание
    Rejected { status: u16, body: String },
}

/// Отказ Shopify, похожий на ошибку валидации на его стороне
pub fn is_bad_request_status(status: u16) -> bool {
    status == 400 || status == 422
}

/// Executor для UseCase создания товара в Shopify
///
/// Последовательность: полный обход каталога -> проверка -> POST.
/// Каждый вызов независим, общего состояния между вызовами нет,
/// кроме пула соединений клиента и хранилища токена.
pub struct ProductCreationExecutor {
    api_client: Arc<ShopifyApiClient>,
    token_store: Arc<TokenStore>,
}

impl ProductCreationExecutor {
    pub fn new(api_client: Arc<ShopifyApiClient>, token_store: Arc<TokenStore>) -> Self {
        Self {
            api_client,
            token_store,
        }
    }

    pub async fn create_product(
        &self,
        product: &ProductDto,
    ) -> Result<CreateProductOutcome, ShopifyError> {
        tracing::info!(
            "{}: creating product '{}'",
            CreateShopifyProduct::full_name(),
            product.title
        );

        let access_token = self
            .token_store
            .access_token()
            .ok_or(ShopifyError::NotAuthorized)?;

        let known_skus: KnownSkus = self
            .api_client
            .fetch_all_skus(&access_token)
            .await?
            .into_iter()
            .collect();

        let errors = validate_product(product, &known_skus);
        if !errors.is_empty() {
            tracing::warn!("Product validation failed: {}", errors.join("; "));
            return Ok(CreateProductOutcome::Invalid(errors));
        }

        match self.api_client.create_product(&access_token, product).await? {
            SubmitReply::Created(created) => {
                tracing::info!("Product created successfully.");
                Ok(CreateProductOutcome::Created(created))
            }
            SubmitReply::Rejected { status, body } => {
                Ok(CreateProductOutcome::Rejected { status, body })
            }
        }
    }
}
