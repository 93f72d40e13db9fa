//! Cat CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use common::Either;
use domain::{CatDto, CatId, CatMapper, CatRepository, CatService, CatUpdate, CreateCatRequest};
use serde::Serialize;

use crate::error::ApiError;

/// Shared application state accessible from the cat handlers.
pub struct AppState<R: CatRepository> {
    pub cat_service: CatService<R>,
}

// -- Response types --

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl MessageResponse {
    fn success(message: &'static str) -> Json<Self> {
        Json(Self {
            status: "success",
            message,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> DataResponse<T> {
    fn success(data: T) -> Json<Self> {
        Json(Self {
            status: "success",
            data,
        })
    }
}

fn parse_cat_id(id: &str) -> Result<CatId, ApiError> {
    Ok(CatId::parse(id)?)
}

// -- Handlers --

/// POST /cats: validate and store a new cat.
#[tracing::instrument(skip(state, payload))]
pub async fn create<R: CatRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    payload: Result<Json<CreateCatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    match state.cat_service.create_cat(request).await? {
        Either::Right(id) => Ok((
            StatusCode::CREATED,
            [(header::LOCATION, format!("/cats/{id}"))],
            MessageResponse::success("Cat created successfully"),
        )),
        Either::Left(err) => Err(err.into()),
    }
}

/// GET /cats: every stored cat.
#[tracing::instrument(skip(state))]
pub async fn list<R: CatRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<DataResponse<Vec<CatDto>>>, ApiError> {
    let cats = state.cat_service.list_cats().await?;
    Ok(DataResponse::success(CatMapper::to_dto_list(&cats)))
}

/// GET /cats/{id}: a single cat.
#[tracing::instrument(skip(state))]
pub async fn get<R: CatRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<CatDto>>, ApiError> {
    let cat_id = parse_cat_id(&id)?;
    let cat = state
        .cat_service
        .get_cat(cat_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Cat not found".to_string()))?;

    Ok(DataResponse::success(CatMapper::to_dto(&cat)))
}

/// PATCH /cats/{id}: apply a partial update.
#[tracing::instrument(skip(state, payload))]
pub async fn update<R: CatRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    payload: Result<Json<CatUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cat_id = parse_cat_id(&id)?;
    let Json(changes) = payload?;

    match state.cat_service.update_cat(cat_id, changes).await? {
        Either::Right(()) => Ok(MessageResponse::success("Cat updated successfully")),
        Either::Left(err) => Err(err.into()),
    }
}

/// DELETE /cats/{id}: remove a cat.
#[tracing::instrument(skip(state))]
pub async fn delete<R: CatRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cat_id = parse_cat_id(&id)?;

    match state.cat_service.delete_cat(cat_id).await? {
        Either::Right(()) => Ok(MessageResponse::success("Cat deleted successfully")),
        Either::Left(err) => Err(err.into()),
    }
}
