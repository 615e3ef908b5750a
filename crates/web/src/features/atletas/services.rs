use sqlx::PgPool;
use storage::{
    dto::atleta::{
        AtletaFilter, AtletaResponse, AtletaSummary, CreateAtletaRequest, UpdateAtletaRequest,
    },
    dto::common::{PaginatedResponse, PaginationParams},
    error::StorageError,
    repository::atleta::AtletaRepository,
    repository::categoria::CategoriaRepository,
    repository::centro_treinamento::CentroTreinamentoRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// Create a new athlete. The referenced category and training center are
/// resolved by name first; a missing reference answers 400 before anything is
/// written.
pub async fn create_atleta(pool: &PgPool, req: &CreateAtletaRequest) -> WebResult<AtletaResponse> {
    let categoria = CategoriaRepository::new(pool)
        .find_by_nome(&req.categoria.nome)
        .await?
        .ok_or_else(|| {
            WebError::ReferenceNotFound(format!(
                "A categoria {} não foi encontrada.",
                req.categoria.nome
            ))
        })?;

    let centro = CentroTreinamentoRepository::new(pool)
        .find_by_nome(&req.centro_treinamento.nome)
        .await?
        .ok_or_else(|| {
            WebError::ReferenceNotFound(format!(
                "O centro de treinamento {} não foi encontrado.",
                req.centro_treinamento.nome
            ))
        })?;

    let atleta = AtletaResponse::from_request(req);

    AtletaRepository::new(pool)
        .create(&atleta, categoria.pk_id, centro.pk_id)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                WebError::Conflict(format!(
                    "Já existe um atleta cadastrado com o CPF: {}",
                    req.cpf
                ))
            } else {
                WebError::Storage(e)
            }
        })?;

    Ok(atleta)
}

/// List athletes as the name/category/center projection, filtered and wrapped
/// in a page envelope.
pub async fn list_atletas(
    pool: &PgPool,
    filter: &AtletaFilter,
    pagination: &PaginationParams,
) -> WebResult<PaginatedResponse<AtletaSummary>> {
    let repo = AtletaRepository::new(pool);

    let data = repo
        .list(filter, pagination.limit(), pagination.offset())
        .await?;
    let total = repo.count(filter).await?;

    Ok(PaginatedResponse::new(
        data,
        pagination.page,
        pagination.page_size,
        total,
    ))
}

/// Get an athlete by public identifier.
pub async fn get_atleta(pool: &PgPool, id: Uuid) -> WebResult<AtletaResponse> {
    let atleta = AtletaRepository::new(pool)
        .find_by_id(id)
        .await
        .map_err(|e| not_found_by_id(e, id))?;

    Ok(atleta.into())
}

/// Apply a partial update to an athlete and return the refreshed shape.
pub async fn update_atleta(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateAtletaRequest,
) -> WebResult<AtletaResponse> {
    let repo = AtletaRepository::new(pool);

    let existing = repo
        .find_by_id(id)
        .await
        .map_err(|e| not_found_by_id(e, id))?;

    let merged = req.merge_into(&existing);

    let updated = repo.update(id, &merged).await.map_err(|e| {
        if e.is_unique_violation() {
            WebError::Conflict(format!(
                "Já existe um atleta cadastrado com o CPF: {}",
                merged.cpf
            ))
        } else {
            not_found_by_id(e, id)
        }
    })?;

    Ok(AtletaResponse::from_model(
        updated,
        existing.categoria,
        existing.centro_treinamento,
    ))
}

/// Delete an athlete by public identifier.
pub async fn delete_atleta(pool: &PgPool, id: Uuid) -> WebResult<()> {
    AtletaRepository::new(pool)
        .delete(id)
        .await
        .map_err(|e| not_found_by_id(e, id))
}

fn not_found_by_id(error: StorageError, id: Uuid) -> WebError {
    match error {
        StorageError::NotFound => {
            WebError::NotFound(format!("Atleta não encontrado no id: {id}"))
        }
        other => WebError::Storage(other),
    }
}
