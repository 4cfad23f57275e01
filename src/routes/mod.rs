mod actors;
mod auth;
mod cast_members;
mod cookies;
mod productions;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{AppState, error::AppError};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/productions", get(productions::list).post(productions::create))
        .route(
            "/productions/{id}",
            get(productions::show).patch(productions::update).delete(productions::destroy),
        )
        .route("/actors", get(actors::list).post(actors::create))
        .route(
            "/actors/{id}",
            get(actors::show).patch(actors::update).delete(actors::destroy),
        )
        .route("/cast_members", get(cast_members::list).post(cast_members::create))
        .route(
            "/cast_members/{id}",
            get(cast_members::show).patch(cast_members::update).delete(cast_members::destroy),
        )
        .route("/users", post(auth::signup))
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/authorized", get(auth::authorized))
        .route("/logout", delete(auth::logout))
        .route("/dark_mode", get(cookies::dark_mode))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::not_found("Not Found: Sorry the resource you are looking for does not exist")
}
