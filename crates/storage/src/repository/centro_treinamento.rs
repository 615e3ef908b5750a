use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::centro_treinamento::CentroTreinamentoResponse;
use crate::error::{Result, StorageError};
use crate::models::CentroTreinamento;

pub struct CentroTreinamentoRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CentroTreinamentoRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new training center. Runs inside a transaction; rolls back on
    /// drop if the insert fails.
    pub async fn create(&self, centro: &CentroTreinamentoResponse) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO centros_treinamento (id, nome, endereco, proprietario) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(centro.id)
        .bind(&centro.nome)
        .bind(&centro.endereco)
        .bind(&centro.proprietario)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    /// List all training centers.
    pub async fn list(&self) -> Result<Vec<CentroTreinamento>> {
        let centros = sqlx::query_as::<_, CentroTreinamento>(
            "SELECT pk_id, id, nome, endereco, proprietario \
             FROM centros_treinamento ORDER BY nome",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(centros)
    }

    /// Find a training center by public identifier.
    pub async fn find_by_id(&self, id: Uuid) -> Result<CentroTreinamento> {
        let centro = sqlx::query_as::<_, CentroTreinamento>(
            "SELECT pk_id, id, nome, endereco, proprietario \
             FROM centros_treinamento WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(centro)
    }

    /// Find a training center by its unique name.
    pub async fn find_by_nome(&self, nome: &str) -> Result<Option<CentroTreinamento>> {
        let centro = sqlx::query_as::<_, CentroTreinamento>(
            "SELECT pk_id, id, nome, endereco, proprietario \
             FROM centros_treinamento WHERE nome = $1",
        )
        .bind(nome)
        .fetch_optional(self.pool)
        .await?;

        Ok(centro)
    }
}
