use serde::{Deserialize, Serialize};

/// Новый товар, ожидающий отправки в Shopify
///
/// Сериализуется в формате Shopify Admin API (`body_html` для описания),
/// поэтому один и тот же тип используется и для входящего запроса,
/// и для тела `POST products.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub title: String,

    /// Описание товара (HTML)
    #[serde(rename = "body_html", default)]
    pub description: String,

    #[serde(default)]
    pub variants: Vec<ProductVariantDto>,

    #[serde(default)]
    pub images: Vec<ProductImageDto>,
}

/// Вариант товара
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductVariantDto {
    #[serde(default)]
    pub sku: String,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub inventory_quantity: i32,
}

/// Изображение товара: ссылка или вложение в base64
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductImageDto {
    #[serde(default)]
    pub attachment: Option<String>,

    #[serde(default)]
    pub src: Option<String>,
}
