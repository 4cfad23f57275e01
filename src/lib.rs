pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;
pub mod serializer;
pub mod session;
pub mod store;
pub mod validation;

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    session::{MemorySessionStore, SessionStore},
    store::Store,
};

pub struct AppState {
    pub config: Arc<Config>,
    pub store: Store,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(config: Arc<Config>, store: Store) -> Self {
        let sessions = Arc::new(MemorySessionStore::new(config.session_ttl_secs));
        Self { config, store, sessions }
    }
}

pub(crate) fn now_sec() -> i64 {
    jiff::Timestamp::now().as_second()
}

pub fn app(state: Arc<AppState>) -> Router {
    routes::router(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
