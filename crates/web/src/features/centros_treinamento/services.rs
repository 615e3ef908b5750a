use sqlx::PgPool;
use storage::{
    dto::centro_treinamento::{CentroTreinamentoResponse, CreateCentroTreinamentoRequest},
    error::StorageError,
    repository::centro_treinamento::CentroTreinamentoRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// Create a new training center.
pub async fn create_centro_treinamento(
    pool: &PgPool,
    req: &CreateCentroTreinamentoRequest,
) -> WebResult<CentroTreinamentoResponse> {
    let centro = CentroTreinamentoResponse::from_request(req);

    CentroTreinamentoRepository::new(pool)
        .create(&centro)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                WebError::Conflict(format!(
                    "Já existe um centro de treinamento cadastrado com o nome: {}",
                    req.nome
                ))
            } else {
                WebError::Storage(e)
            }
        })?;

    Ok(centro)
}

/// List all training centers.
pub async fn list_centros_treinamento(
    pool: &PgPool,
) -> WebResult<Vec<CentroTreinamentoResponse>> {
    let centros = CentroTreinamentoRepository::new(pool).list().await?;

    Ok(centros
        .into_iter()
        .map(CentroTreinamentoResponse::from)
        .collect())
}

/// Get a training center by public identifier.
pub async fn get_centro_treinamento(
    pool: &PgPool,
    id: Uuid,
) -> WebResult<CentroTreinamentoResponse> {
    let centro = CentroTreinamentoRepository::new(pool)
        .find_by_id(id)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => WebError::NotFound(format!(
                "Centro de treinamento não encontrado no id: {id}"
            )),
            other => WebError::Storage(other),
        })?;

    Ok(centro.into())
}
