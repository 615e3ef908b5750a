use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::categoria::CategoriaResponse;
use crate::error::{Result, StorageError};
use crate::models::Categoria;

pub struct CategoriaRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoriaRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new category. Runs inside a transaction; rolls back on drop
    /// if the insert fails.
    pub async fn create(&self, categoria: &CategoriaResponse) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO categorias (id, nome) VALUES ($1, $2)")
            .bind(categoria.id)
            .bind(&categoria.nome)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// List all categories.
    pub async fn list(&self) -> Result<Vec<Categoria>> {
        let categorias = sqlx::query_as::<_, Categoria>(
            "SELECT pk_id, id, nome FROM categorias ORDER BY nome",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categorias)
    }

    /// Find a category by public identifier.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Categoria> {
        let categoria = sqlx::query_as::<_, Categoria>(
            "SELECT pk_id, id, nome FROM categorias WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(categoria)
    }

    /// Find a category by its unique name.
    pub async fn find_by_nome(&self, nome: &str) -> Result<Option<Categoria>> {
        let categoria = sqlx::query_as::<_, Categoria>(
            "SELECT pk_id, id, nome FROM categorias WHERE nome = $1",
        )
        .bind(nome)
        .fetch_optional(self.pool)
        .await?;

        Ok(categoria)
    }
}
