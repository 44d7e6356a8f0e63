//! HTTP server mode serving paginated mock records

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::generator::Record;
use crate::pagination::{fetch_page, PageRequest, PaginatedResponse};
use crate::token::{MockConfig, TokenCodec};
use crate::types::{EntityKind, API_KEY_HEADER};

/// App state shared across handlers
#[derive(Debug, Clone)]
struct AppState {
    codec: TokenCodec,
}

/// Error returned from handlers, rendered as `{"detail": "..."}`
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

/// Build the application router
pub fn router(codec: TokenCodec) -> Router {
    let state = AppState { codec };

    // Build CORS layer - mock clients may call from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/students", get(list_students))
        .route("/api/schools", get(list_schools))
        .route("/api/villages", get(list_villages))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server and run until Ctrl-C
pub async fn serve(config: ServerConfig) -> Result<()> {
    if config.uses_default_secret() {
        tracing::warn!("JWT_SECRET is not set; using the development secret");
    }

    let app = router(TokenCodec::new(&config.jwt_secret));

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| {
            Error::server(format!(
                "Failed to bind to {}:{}: {e}",
                config.host, config.port
            ))
        })?;
    let addr = listener
        .local_addr()
        .map_err(|e| Error::server(format!("Failed to read bound address: {e}")))?;
    tracing::info!("Starting HTTP server on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::server(format!("Server error: {e}")))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

/// Service description
async fn root() -> impl IntoResponse {
    Json(service_description())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}

async fn list_students(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: std::result::Result<Query<HashMap<String, String>>, QueryRejection>,
) -> std::result::Result<Json<PaginatedResponse<Record>>, ApiError> {
    list_records(EntityKind::Student, &state, &headers, query).await
}

async fn list_schools(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: std::result::Result<Query<HashMap<String, String>>, QueryRejection>,
) -> std::result::Result<Json<PaginatedResponse<Record>>, ApiError> {
    list_records(EntityKind::School, &state, &headers, query).await
}

async fn list_villages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: std::result::Result<Query<HashMap<String, String>>, QueryRejection>,
) -> std::result::Result<Json<PaginatedResponse<Record>>, ApiError> {
    list_records(EntityKind::Village, &state, &headers, query).await
}

/// Authenticate, validate, wait, then build the page
async fn list_records(
    kind: EntityKind,
    state: &AppState,
    headers: &HeaderMap,
    query: std::result::Result<Query<HashMap<String, String>>, QueryRejection>,
) -> std::result::Result<Json<PaginatedResponse<Record>>, ApiError> {
    let config = authenticate(&state.codec, headers).inspect_err(|e| {
        tracing::debug!(kind = %kind, error = %e, "Rejected API key");
    })?;

    let Query(params) = query.map_err(|e| Error::validation("query", e.body_text()))?;
    let request = parse_page_request(&params)?;

    let delay = config.delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let response = fetch_page(kind, request, config.total_records);
    tracing::debug!(
        kind = %kind,
        page = request.page,
        page_size = request.page_size,
        returned = response.data.len(),
        "Served page"
    );
    Ok(Json(response))
}

/// Verify the `X-API-Key` header
pub fn authenticate(codec: &TokenCodec, headers: &HeaderMap) -> Result<MockConfig> {
    let missing = || Error::MissingApiKey {
        header: API_KEY_HEADER.to_string(),
    };
    let value = headers.get(API_KEY_HEADER).ok_or_else(missing)?;
    let token = value
        .to_str()
        .map_err(|_| Error::token_invalid("header is not valid ASCII"))?
        .trim();
    if token.is_empty() {
        return Err(missing());
    }
    codec.decode(token)
}

/// Parse `page` and `page_size` from raw query parameters
pub fn parse_page_request(params: &HashMap<String, String>) -> Result<PageRequest> {
    let page = parse_int(params, "page")?;
    let page_size = parse_int(params, "page_size")?;
    PageRequest::new(page, page_size)
}

fn parse_int(params: &HashMap<String, String>, field: &str) -> Result<Option<i64>> {
    params
        .get(field)
        .map(|raw| {
            raw.trim().parse::<i64>().map_err(|_| {
                Error::validation(field, format!("expected an integer, got '{raw}'"))
            })
        })
        .transpose()
}

/// Describe the service and its routes
pub fn service_description() -> Value {
    let endpoints: Vec<String> = EntityKind::ALL.iter().map(|k| k.route()).collect();
    json!({
        "message": "Mock API Service",
        "endpoints": endpoints,
        "authentication": format!("API Key required in {API_KEY_HEADER} header"),
    })
}
