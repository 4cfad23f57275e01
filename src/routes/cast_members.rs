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
    models::{CastMemberChanges, NewCastMember},
    serializer::{self, Rules},
    store::CastMemberDetail,
};

const CREATED_SHAPE: Rules<'static> = Rules::exclude(&["production.id", "production.budget"]);
const SUMMARY_SHAPE: Rules<'static> = Rules::only(&["name", "role", "production.title"]);

fn render(detail: &CastMemberDetail) -> Value {
    serializer::cast_member_with_links(
        &detail.cast_member,
        detail.production.as_ref(),
        detail.actor.as_ref(),
    )
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Value>> {
    let cast = state.store.cast_members().list().await?;
    Ok(Json(cast.iter().map(render).collect()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(body), _): WithRejection<Json<NewCastMember>, AppError>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let created = state.store.cast_members().create(body).await?;
    tracing::info!(
        id = created.cast_member.id,
        production_id = created.cast_member.production_id,
        actor_id = created.cast_member.actor_id,
        "cast member created"
    );
    Ok((StatusCode::CREATED, Json(CREATED_SHAPE.apply(render(&created)))))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<Value>> {
    let detail = state
        .store
        .cast_members()
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("The Cast Member you were looking for was not found"))?;
    Ok(Json(SUMMARY_SHAPE.apply(render(&detail))))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(changes), _): WithRejection<Json<CastMemberChanges>, AppError>,
) -> AppResult<Json<Value>> {
    let cast = state.store.cast_members();
    cast.update(id, changes).await?.ok_or_else(|| {
        AppError::not_found("The Cast Member you were trying to update was not found")
    })?;

    let detail = cast.get(id).await?.ok_or_else(|| {
        AppError::not_found("The Cast Member you were trying to update was not found")
    })?;
    Ok(Json(render(&detail)))
}

pub async fn destroy(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<StatusCode> {
    if !state.store.cast_members().delete(id).await? {
        return Err(AppError::not_found(
            "The Cast Member you were trying to delete was not found",
        ));
    }
    Ok(StatusCode::NO_CONTENT)
}
