use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::{CookieJar, WithRejection};
use serde_json::Value;

use crate::{
    AppState,
    entities::user,
    error::{AppError, AppResult},
    models::{LoginRequest, NewUser},
    serializer,
    session::{self, SESSION_COOKIE},
};

const UNAUTHORIZED: &str = "User is unauthorized";

/// Replaces whatever session the client already held.
fn start_session(state: &AppState, jar: CookieJar, user: &user::Model) -> CookieJar {
    if let Some(previous) = jar.get(SESSION_COOKIE) {
        state.sessions.revoke(previous.value());
    }
    let token = state.sessions.create(user.id);
    jar.add(session::session_cookie(token, state.config.session_ttl_secs))
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    WithRejection(Json(body), _): WithRejection<Json<NewUser>, AppError>,
) -> AppResult<(StatusCode, CookieJar, Json<Value>)> {
    let created = state.store.users().create(body).await?;
    tracing::info!(user_id = created.id, "user signed up");
    let jar = start_session(&state, jar, &created);
    Ok((StatusCode::CREATED, jar, Json(serializer::user(&created))))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    WithRejection(Json(body), _): WithRejection<Json<LoginRequest>, AppError>,
) -> AppResult<(CookieJar, Json<Value>)> {
    let found = state
        .store
        .users()
        .find_by_name(&body.name)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    tracing::info!(user_id = found.id, "user logged in");
    let jar = start_session(&state, jar, &found);
    Ok((jar, Json(serializer::user(&found))))
}

pub async fn authorized(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> AppResult<Json<Value>> {
    let user_id = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.sessions.resolve(cookie.value()))
        .ok_or_else(|| AppError::unauthorized(UNAUTHORIZED))?;
    let found = state
        .store
        .users()
        .get(user_id)
        .await?
        .ok_or_else(|| AppError::unauthorized(UNAUTHORIZED))?;
    Ok(Json(serializer::user(&found)))
}

pub async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> (StatusCode, CookieJar) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.revoke(cookie.value());
    }
    (StatusCode::NO_CONTENT, jar.remove(session::expired_session_cookie()))
}
