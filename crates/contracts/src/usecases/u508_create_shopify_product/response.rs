use serde::{Deserialize, Serialize};

pub const VALIDATION_FAILED_MESSAGE: &str = "Validation errors occurred.";
pub const REMOTE_FAILURE_MESSAGE: &str = "Failed to create the product in your shopify store.";
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "An unexpected error occurred.";
pub const NOT_AUTHORIZED_MESSAGE: &str = "Shopify store is not authorized.";
pub const CREATED_MESSAGE: &str = "Product created successfully.";

/// Товар успешно создан
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductResponse {
    pub message: String,
    /// Товар в том виде, в котором его вернул Shopify
    pub product: serde_json::Value,
}

/// Локальная проверка не пройдена, запрос в Shopify не отправлялся
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub message: String,
    pub errors: Vec<String>,
}

/// Shopify отклонил создание товара
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteFailureResponse {
    pub message: String,
    #[serde(rename = "errorDetails")]
    pub error_details: String,
}

/// Непредвиденная ошибка (или отсутствие авторизации)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub exception: String,
}

impl CreateProductResponse {
    pub fn new(product: serde_json::Value) -> Self {
        Self {
            message: CREATED_MESSAGE.to_string(),
            product,
        }
    }
}

impl ValidationErrorResponse {
    pub fn new(errors: Vec<String>) -> Self {
        Self {
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            errors,
        }
    }
}

impl RemoteFailureResponse {
    pub fn new(error_details: impl Into<String>) -> Self {
        Self {
            message: REMOTE_FAILURE_MESSAGE.to_string(),
            error_details: error_details.into(),
        }
    }
}

impl ErrorResponse {
    pub fn unexpected(exception: impl Into<String>) -> Self {
        Self {
            message: UNEXPECTED_FAILURE_MESSAGE.to_string(),
            exception: exception.into(),
        }
    }

    pub fn not_authorized(exception: impl Into<String>) -> Self {
        Self {
            message: NOT_AUTHORIZED_MESSAGE.to_string(),
            exception: exception.into(),
        }
    }
}
