use std::sync::{Arc, Mutex};

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use shared::{ASK_ROUTE, UPLOAD_ROUTE};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

mod routes;

pub use routes::ApiError;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub id: Uuid,
    pub file_name: String,
    pub size: usize,
}

/// Everything the server remembers: the documents uploaded since it started.
#[derive(Debug, Clone, Default)]
pub struct AppState(pub Arc<Mutex<Vec<StoredDocument>>>);

impl AppState {
    pub fn latest(&self) -> Option<StoredDocument> {
        self.0.lock().ok()?.last().cloned()
    }
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        // allow `GET` and `POST` when accessing the resource
        .allow_methods([Method::GET, Method::POST])
        // allow requests from any origin
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route(ASK_ROUTE, post(routes::ask))
        .route(UPLOAD_ROUTE, post(routes::upload))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
