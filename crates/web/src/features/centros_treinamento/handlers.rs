use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::centro_treinamento::{CentroTreinamentoResponse, CreateCentroTreinamentoRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/centros_treinamento",
    request_body = CreateCentroTreinamentoRequest,
    responses(
        (status = 201, description = "Training center created successfully", body = CentroTreinamentoResponse),
        (status = 303, description = "A training center with the same name already exists"),
        (status = 400, description = "Validation error")
    ),
    tag = "centros_treinamento"
)]
pub async fn create_centro_treinamento(
    State(db): State<Database>,
    Json(req): Json<CreateCentroTreinamentoRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let centro = services::create_centro_treinamento(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(centro)).into_response())
}

#[utoipa::path(
    get,
    path = "/centros_treinamento",
    responses(
        (status = 200, description = "List all training centers successfully", body = Vec<CentroTreinamentoResponse>)
    ),
    tag = "centros_treinamento"
)]
pub async fn list_centros_treinamento(State(db): State<Database>) -> Result<Response, WebError> {
    let centros = services::list_centros_treinamento(db.pool()).await?;

    Ok(Json(centros).into_response())
}

#[utoipa::path(
    get,
    path = "/centros_treinamento/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center public identifier")
    ),
    responses(
        (status = 200, description = "Training center found", body = CentroTreinamentoResponse),
        (status = 404, description = "Training center not found")
    ),
    tag = "centros_treinamento"
)]
pub async fn get_centro_treinamento(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let centro = services::get_centro_treinamento(db.pool(), id).await?;

    Ok(Json(centro).into_response())
}
