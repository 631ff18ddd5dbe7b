pub mod request;
pub mod response;

pub use request::{ProductDto, ProductImageDto, ProductVariantDto};
pub use response::{
    CreateProductResponse, ErrorResponse, RemoteFailureResponse, ValidationErrorResponse,
};

use crate::usecases::common::UseCaseMetadata;

pub struct CreateShopifyProduct;

impl UseCaseMetadata for CreateShopifyProduct {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "create_shopify_product"
    }

    fn display_name() -> &'static str {
        "Создание товара в Shopify"
    }

    fn description() -> &'static str {
        "Проверка нового товара по каталогу магазина и публикация через Shopify Admin API"
    }
}
