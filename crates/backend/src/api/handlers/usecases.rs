use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::usecases::u508_create_shopify_product::{
    CreateProductResponse, ErrorResponse, ProductDto, RemoteFailureResponse,
    ValidationErrorResponse,
};
use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::shared::marketplaces::shopify::{self, ShopifyError};
use crate::system::oauth;
use crate::usecases::u508_create_shopify_product::executor::is_bad_request_status;
use crate::usecases::u508_create_shopify_product::{CreateProductOutcome, ProductCreationExecutor};

// ============================================================================
// UseCase u508: Create product in Shopify
// ============================================================================

static PRODUCT_EXECUTOR: OnceCell<Arc<ProductCreationExecutor>> = OnceCell::new();

fn product_executor() -> Result<Arc<ProductCreationExecutor>, ShopifyError> {
    PRODUCT_EXECUTOR
        .get_or_try_init(|| {
            Ok(Arc::new(ProductCreationExecutor::new(
                shopify::client()?,
                oauth::token_store(),
            )))
        })
        .cloned()
}

/// POST /api/u508/products
pub async fn u508_create_product(Json(product): Json<ProductDto>) -> Response {
    let result = match product_executor() {
        Ok(executor) => executor.create_product(&product).await,
        Err(e) => Err(e),
    };
    create_product_response(result)
}

/// Преобразовать результат UseCase в HTTP ответ
fn create_product_response(result: Result<CreateProductOutcome, ShopifyError>) -> Response {
    match result {
        Ok(CreateProductOutcome::Created(product)) => (
            StatusCode::CREATED,
            Json(CreateProductResponse::new(product)),
        )
            .into_response(),
        Ok(CreateProductOutcome::Invalid(errors)) => (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse::new(errors)),
        )
            .into_response(),
        Ok(CreateProductOutcome::Rejected { status, body }) => {
            let status = if is_bad_request_status(status) {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
            };
            (status, Json(RemoteFailureResponse::new(body))).into_response()
        }
        Err(e @ ShopifyError::NotAuthorized) => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::not_authorized(e.to_string())),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("An unexpected error occurred while creating the product: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::unexpected(e.to_string())),
            )
                .into_response()
        }
    }
}
