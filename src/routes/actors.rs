use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde_json::Value;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{ActorChanges, NewActor},
    serializer,
    store::ActorDetail,
};

fn render(detail: &ActorDetail) -> Value {
    serializer::actor_with_roles(&detail.actor, &detail.cast_members, &detail.productions)
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Value>> {
    let actors = state.store.actors().list().await?;
    Ok(Json(actors.iter().map(render).collect()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(body), _): WithRejection<Json<NewActor>, AppError>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let created = state.store.actors().create(body).await?;
    tracing::info!(id = created.id, "actor created");
    Ok((StatusCode::CREATED, Json(serializer::actor_with_roles(&created, &[], &[]))))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<Value>> {
    let detail = state
        .store
        .actors()
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("The Actor you were looking for was not found"))?;
    Ok(Json(render(&detail)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(changes), _): WithRejection<Json<ActorChanges>, AppError>,
) -> AppResult<Json<Value>> {
    let actors = state.store.actors();
    actors
        .update(id, changes)
        .await?
        .ok_or_else(|| AppError::not_found("The Actor you were trying to update was not found"))?;

    let detail = actors
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("The Actor you were trying to update was not found"))?;
    Ok(Json(render(&detail)))
}

pub async fn destroy(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<StatusCode> {
    if !state.store.actors().delete(id).await? {
        return Err(AppError::not_found("The Actor you were trying to delete was not found"));
    }
    tracing::info!(id, "actor deleted");
    Ok(StatusCode::NO_CONTENT)
}
