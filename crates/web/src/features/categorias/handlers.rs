use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::categoria::{CategoriaResponse, CreateCategoriaRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/categorias",
    request_body = CreateCategoriaRequest,
    responses(
        (status = 201, description = "Category created successfully", body = CategoriaResponse),
        (status = 303, description = "A category with the same name already exists"),
        (status = 400, description = "Validation error")
    ),
    tag = "categorias"
)]
pub async fn create_categoria(
    State(db): State<Database>,
    Json(req): Json<CreateCategoriaRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let categoria = services::create_categoria(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(categoria)).into_response())
}

#[utoipa::path(
    get,
    path = "/categorias",
    responses(
        (status = 200, description = "List all categories successfully", body = Vec<CategoriaResponse>)
    ),
    tag = "categorias"
)]
pub async fn list_categorias(State(db): State<Database>) -> Result<Response, WebError> {
    let categorias = services::list_categorias(db.pool()).await?;

    Ok(Json(categorias).into_response())
}

#[utoipa::path(
    get,
    path = "/categorias/{id}",
    params(
        ("id" = Uuid, Path, description = "Category public identifier")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoriaResponse),
        (status = 404, description = "Category not found")
    ),
    tag = "categorias"
)]
pub async fn get_categoria(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let categoria = services::get_categoria(db.pool(), id).await?;

    Ok(Json(categoria).into_response())
}
