use sqlx::PgPool;
use storage::{
    dto::categoria::{CategoriaResponse, CreateCategoriaRequest},
    error::StorageError,
    repository::categoria::CategoriaRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// Create a new category.
pub async fn create_categoria(
    pool: &PgPool,
    req: &CreateCategoriaRequest,
) -> WebResult<CategoriaResponse> {
    let categoria = CategoriaResponse::from_request(req);

    CategoriaRepository::new(pool)
        .create(&categoria)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                WebError::Conflict(format!(
                    "Já existe uma categoria cadastrada com o nome: {}",
                    req.nome
                ))
            } else {
                WebError::Storage(e)
            }
        })?;

    Ok(categoria)
}

/// List all categories.
pub async fn list_categorias(pool: &PgPool) -> WebResult<Vec<CategoriaResponse>> {
    let categorias = CategoriaRepository::new(pool).list().await?;

    Ok(categorias.into_iter().map(CategoriaResponse::from).collect())
}

/// Get a category by public identifier.
pub async fn get_categoria(pool: &PgPool, id: Uuid) -> WebResult<CategoriaResponse> {
    let categoria = CategoriaRepository::new(pool)
        .find_by_id(id)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => {
                WebError::NotFound(format!("Categoria não encontrada no id: {id}"))
            }
            other => WebError::Storage(other),
        })?;

    Ok(categoria.into())
}
