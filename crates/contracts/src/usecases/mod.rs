pub mod common;
pub mod u508_create_shopify_product;
