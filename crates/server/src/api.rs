//! JSON API for the shop widget.
//!
//! Endpoints:
//! - `POST /api/v1/chat`             - one conversational turn
//! - `GET  /api/v1/products/popular` - bestseller shelf
//! - `GET  /api/v1/products/new`     - new-arrivals shelf
//! - `GET  /api/v1/products/search`  - filtered, ranked product search
//!
//! Sessions live in process memory keyed by UUID. A request without a
//! `session_id` starts a fresh session; the id comes back in the response so
//! the widget can thread follow-up turns.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use atuendo_core::{
    Category, ChatEngine, ChatReply, ChatSession, FilterState, Product,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct ApiState {
    engine: Arc<ChatEngine>,
    sessions: Arc<Mutex<HashMap<Uuid, ChatSession>>>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub session_id: Option<Uuid>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: Uuid,
    pub reply: ChatReply,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ShelfQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub category: Option<Category>,
    pub style: Option<String>,
    pub occasion: Option<String>,
    pub color: Option<String>,
    pub max_price: Option<Decimal>,
    pub size: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total: usize,
}

const DEFAULT_SHELF_LIMIT: usize = 8;

pub fn router(engine: ChatEngine) -> Router {
    let state =
        ApiState { engine: Arc::new(engine), sessions: Arc::new(Mutex::new(HashMap::new())) };

    Router::new()
        .route("/api/v1/chat", post(chat))
        .route("/api/v1/products/popular", get(popular))
        .route("/api/v1/products/new", get(new_arrivals))
        .route("/api/v1/products/search", get(search))
        .with_state(state)
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

pub async fn chat(
    State(state): State<ApiState>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<ChatResponse> {
    if request.message.trim().is_empty() {
        return Err(bad_request("message must not be empty"));
    }

    let mut sessions = state.sessions.lock().map_err(|_| internal("session store poisoned"))?;

    let session_id = request.session_id.unwrap_or_else(Uuid::new_v4);
    let session = sessions.entry(session_id).or_insert_with(ChatSession::new);

    let reply = state.engine.process_message(session, &request.message);

    info!(
        event_name = "chat.turn",
        session_id = %session_id,
        turn = session.turn_count(),
        intent = session.last_intent.as_ref().map(|intent| intent.label()).unwrap_or("unknown"),
        "chat turn handled"
    );

    Ok(Json(ChatResponse { session_id, reply }))
}

pub async fn popular(
    State(state): State<ApiState>,
    Query(query): Query<ShelfQuery>,
) -> Json<ProductListResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_SHELF_LIMIT);
    let products: Vec<Product> =
        state.engine.popular_products(limit).into_iter().cloned().collect();
    let total = products.len();
    Json(ProductListResponse { products, total })
}

pub async fn new_arrivals(
    State(state): State<ApiState>,
    Query(query): Query<ShelfQuery>,
) -> Json<ProductListResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_SHELF_LIMIT);
    let products: Vec<Product> =
        state.engine.new_products(limit).into_iter().cloned().collect();
    let total = products.len();
    Json(ProductListResponse { products, total })
}

pub async fn search(
    State(state): State<ApiState>,
    Query(query): Query<SearchQuery>,
) -> Json<ProductListResponse> {
    let filters = FilterState {
        category: query.category,
        style: query.style,
        occasion: query.occasion,
        color: query.color,
        max_price: query.max_price,
        size: query.size,
    };

    let products: Vec<Product> =
        state.engine.search_products(&filters).into_iter().cloned().collect();
    let total = products.len();
    Json(ProductListResponse { products, total })
}

fn bad_request(message: &str) -> (StatusCode, Json<ApiError>) {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(ApiError { error: message.to_string() }))
}

fn internal(message: &str) -> (StatusCode, Json<ApiError>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiError { error: message.to_string() }))
}
