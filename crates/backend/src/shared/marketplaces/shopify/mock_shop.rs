//! Имитация магазина Shopify для тестов клиента и UseCase
//!
//! Поднимает axum-сервер на 127.0.0.1:0 с `products.json` (GET со ссылками
//! `Link`, POST) и `/admin/oauth/access_token`.

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use crate::shared::config::ShopifySettings;

pub const API_VERSION: &str = "2024-01";
pub const TOKEN: &str = "shpat_test";

#[derive(Debug, Clone)]
pub struct MockShopSetup {
    /// Страницы каталога: товары, у каждого список SKU вариантов
    pub pages: Vec<Vec<Vec<Option<&'static str>>>>,
    /// Номер страницы (с 1), которая отвечает 500
    pub fail_on_page: Option<usize>,
    /// Номер страницы, которая отдаёт битый JSON
    pub malformed_page: Option<usize>,
    /// Ссылка next всегда ведёт на первую страницу
    pub cyclic: bool,
    /// Номер страницы, чей заголовок Link содержит байт вне ASCII
    pub non_ascii_link_on_page: Option<usize>,
    pub page_delay: Option<Duration>,
    pub create_status: StatusCode,
    /// Сырое тело успешного ответа на POST вместо JSON
    pub create_body: Option<&'static str>,
    pub token_status: StatusCode,
    pub issued_token: &'static str,
}

impl Default for MockShopSetup {
    fn default() -> Self {
        Self {
            pages: vec![Vec::new()],
            fail_on_page: None,
            malformed_page: None,
            cyclic: false,
            non_ascii_link_on_page: None,
            page_delay: None,
            create_status: StatusCode::CREATED,
            create_body: None,
            token_status: StatusCode::OK,
            issued_token: "shpat_oauth",
        }
    }
}

struct MockState {
    setup: MockShopSetup,
    base_url: String,
    catalog_requests: AtomicUsize,
    created: Mutex<Vec<Value>>,
    token_requests: Mutex<Vec<Value>>,
}

impl MockState {
    fn page_url(&self, page: usize) -> String {
        format!(
            "{}/admin/api/{}/products.json?page_info={}",
            self.base_url, API_VERSION, page
        )
    }
}

pub struct MockShop {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockShop {
    pub async fn start(setup: MockShopSetup) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let state = Arc::new(MockState {
            setup,
            base_url: base_url.clone(),
            catalog_requests: AtomicUsize::new(0),
            created: Mutex::new(Vec::new()),
            token_requests: Mutex::new(Vec::new()),
        });

        let products_path = format!("/admin/api/{}/products.json", API_VERSION);
        let app = Router::new()
            .route(&products_path, get(list_products).post(create_product))
            .route("/admin/oauth/access_token", post(access_token))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, state }
    }

    /// Настройки, указывающие на этот магазин
    pub fn settings(&self) -> ShopifySettings {
        ShopifySettings {
            shop_url: self.base_url.clone(),
            api_version: API_VERSION.to_string(),
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
            access_token: TOKEN.to_string(),
            ..Default::default()
        }
    }

    pub fn catalog_requests(&self) -> usize {
        self.state.catalog_requests.load(Ordering::SeqCst)
    }

    /// Тела всех POST products.json
    pub fn created(&self) -> Vec<Value> {
        self.state.created.lock().unwrap().clone()
    }

    pub fn token_requests(&self) -> Vec<Value> {
        self.state.token_requests.lock().unwrap().clone()
    }
}

#[derive(Deserialize)]
struct PageQuery {
    page_info: Option<usize>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("x-shopify-access-token")
        .and_then(|v| v.to_str().ok())
        == Some(TOKEN)
}

async fn list_products(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    state.catalog_requests.fetch_add(1, Ordering::SeqCst);

    if !authorized(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            r#"{"errors":"[API] Invalid API key or access token"}"#,
        )
            .into_response();
    }

    let page = query.page_info.unwrap_or(1);
    if let Some(delay) = state.setup.page_delay {
        tokio::time::sleep(delay).await;
    }
    if state.setup.fail_on_page == Some(page) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }
    if state.setup.malformed_page == Some(page) {
        return (StatusCode::OK, "{\"products\": [").into_response();
    }

    let products: Vec<Value> = state
        .setup
        .pages
        .get(page.saturating_sub(1))
        .cloned()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, skus)| {
            let variants: Vec<Value> = skus
                .iter()
                .enumerate()
                .map(|(j, sku)| {
                    json!({
                        "id": page * 1000 + i * 10 + j,
                        "sku": sku,
                        "price": "19.99",
                        "inventory_quantity": 3,
                    })
                })
                .collect();
            json!({
                "id": page * 100 + i,
                "title": format!("Product {}-{}", page, i),
                "variants": variants,
            })
        })
        .collect();

    let mut links = Vec::new();
    if page > 1 {
        links.push(format!("<{}>; rel=\"previous\"", state.page_url(page - 1)));
    }
    if state.setup.cyclic {
        links.push(format!("<{}>; rel=\"next\"", state.page_url(1)));
    } else if page < state.setup.pages.len() {
        links.push(format!("<{}>; rel=\"next\"", state.page_url(page + 1)));
    }

    let mut response = Json(json!({ "products": products })).into_response();
    if state.setup.non_ascii_link_on_page == Some(page) {
        let mut raw = b"<https://caf\xE9.example>; rel=\"previous\", ".to_vec();
        raw.extend_from_slice(format!("<{}>; rel=\"next\"", state.page_url(page + 1)).as_bytes());
        response
            .headers_mut()
            .insert(header::LINK, HeaderValue::from_bytes(&raw).unwrap());
    } else if !links.is_empty() {
        response.headers_mut().insert(
            header::LINK,
            HeaderValue::from_str(&links.join(", ")).unwrap(),
        );
    }
    response
}

async fn create_product(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, "unauthorized").into_response();
    }
    state.created.lock().unwrap().push(body.clone());

    let status = state.setup.create_status;
    if let (true, Some(raw)) = (status.is_success(), state.setup.create_body) {
        return (status, raw).into_response();
    }
    if status.is_success() {
        let mut product = body.get("product").cloned().unwrap_or_default();
        product["id"] = json!(632910392);
        (status, Json(json!({ "product": product }))).into_response()
    } else {
        (
            status,
            Json(json!({ "errors": { "title": ["can't be blank"] } })),
        )
            .into_response()
    }
}

async fn access_token(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.token_requests.lock().unwrap().push(body);

    let status = state.setup.token_status;
    if status.is_success() {
        (
            status,
            Json(json!({
                "access_token": state.setup.issued_token,
                "scope": "read_products,write_products",
            })),
        )
            .into_response()
    } else {
        (status, "invalid_request: authorization code was not found or was already used")
            .into_response()
    }
}
