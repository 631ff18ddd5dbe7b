use contracts::usecases::u508_create_shopify_product::ProductDto;
use std::collections::HashSet;

/// SKU, уже существующие в магазине
pub type KnownSkus = HashSet<String>;

pub const TITLE_REQUIRED: &str = "Product title is required.";
pub const VARIANT_REQUIRED: &str = "At least one variant is required.";
pub const SKU_REQUIRED: &str = "SKU is required for all variants.";
pub const PRICE_NOT_POSITIVE: &str = "Variant price must be greater than 0.";
pub const INVENTORY_NEGATIVE: &str = "Inventory quantity cannot be negative.";
pub const IMAGE_SOURCE_REQUIRED: &str =
    "Each image must have either a URL (Src) or a Base64 attachment.";

/// Проверка нового товара перед отправкой в Shopify
///
/// Проверки не прерываются на первой ошибке: возвращаются все сообщения
/// в порядке полей (название, варианты, изображения). Пустой результат
/// означает, что товар можно отправлять.
pub fn validate_product(product: &ProductDto, known_skus: &KnownSkus) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(&product.title) {
        errors.push(TITLE_REQUIRED.to_string());
    }

    if product.variants.is_empty() {
        errors.push(VARIANT_REQUIRED.to_string());
    }

    for variant in &product.variants {
        if is_blank(&variant.sku) {
            errors.push(SKU_REQUIRED.to_string());
        } else if known_skus.contains(&variant.sku) {
            errors.push(format!("Duplicate SKU detected: {}", variant.sku));
        }

        if variant.price <= 0.0 {
            errors.push(PRICE_NOT_POSITIVE.to_string());
        }

        if variant.inventory_quantity < 0 {
            errors.push(INVENTORY_NEGATIVE.to_string());
        }
    }

    for image in &product.images {
        if is_blank_opt(image.src.as_deref()) && is_blank_opt(image.attachment.as_deref()) {
            errors.push(IMAGE_SOURCE_REQUIRED.to_string());
        }
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_blank_opt(value: Option<&str>) -> bool {
    value.map_or(true, is_blank)
}
