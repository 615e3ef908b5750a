use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::atleta::{
        AtletaFilter, AtletaResponse, AtletaSummary, CreateAtletaRequest, UpdateAtletaRequest,
    },
    dto::common::{PaginatedResponse, PaginationParams},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/atletas",
    request_body = CreateAtletaRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AtletaResponse),
        (status = 303, description = "An athlete with the same CPF already exists"),
        (status = 400, description = "Validation error or unknown category/training center")
    ),
    tag = "atletas"
)]
pub async fn create_atleta(
    State(db): State<Database>,
    Json(req): Json<CreateAtletaRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let atleta = services::create_atleta(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(atleta)).into_response())
}

#[utoipa::path(
    get,
    path = "/atletas",
    params(AtletaFilter, PaginationParams),
    responses(
        (status = 200, description = "Paginated athlete listing", body = PaginatedResponse<AtletaSummary>)
    ),
    tag = "atletas"
)]
pub async fn list_atletas(
    State(db): State<Database>,
    Query(filter): Query<AtletaFilter>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, WebError> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let page = services::list_atletas(db.pool(), &filter, &pagination).await?;

    Ok(Json(page).into_response())
}

#[utoipa::path(
    get,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete public identifier")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AtletaResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn get_atleta(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let atleta = services::get_atleta(db.pool(), id).await?;

    Ok(Json(atleta).into_response())
}

#[utoipa::path(
    patch,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete public identifier")
    ),
    request_body = UpdateAtletaRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AtletaResponse),
        (status = 303, description = "An athlete with the same CPF already exists"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn update_atleta(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAtletaRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let atleta = services::update_atleta(db.pool(), id, &req).await?;

    Ok(Json(atleta).into_response())
}

#[utoipa::path(
    delete,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete public identifier")
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn delete_atleta(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_atleta(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
