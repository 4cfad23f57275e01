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
    models::{NewProduction, ProductionChanges},
    serializer,
    store::ProductionDetail,
};

type IdPath = WithRejection<Path<i32>, AppError>;

fn render(detail: &ProductionDetail) -> Value {
    serializer::production_with_cast(&detail.production, &detail.cast_members, &detail.actors)
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Value>> {
    let productions = state.store.productions().list().await?;
    Ok(Json(productions.iter().map(render).collect()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(body), _): WithRejection<Json<NewProduction>, AppError>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let created = state.store.productions().create(body).await?;
    tracing::info!(id = created.id, title = %created.title, "production created");
    Ok((StatusCode::CREATED, Json(serializer::production_with_cast(&created, &[], &[]))))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
) -> AppResult<Json<Value>> {
    let detail = state
        .store
        .productions()
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("The Production you were looking for was not found"))?;
    Ok(Json(render(&detail)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(changes), _): WithRejection<Json<ProductionChanges>, AppError>,
) -> AppResult<Json<Value>> {
    let productions = state.store.productions();
    productions.update(id, changes).await?.ok_or_else(|| {
        AppError::not_found("The Production you were trying to update was not found")
    })?;
    tracing::debug!(id, "production updated");

    let detail = productions
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("The Production you were trying to update was not found"))?;
    Ok(Json(render(&detail)))
}

pub async fn destroy(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
) -> AppResult<StatusCode> {
    if !state.store.productions().delete(id).await? {
        return Err(AppError::not_found("The Production you were trying to delete was not found"));
    }
    tracing::info!(id, "production deleted");
    Ok(StatusCode::NO_CONTENT)
}
