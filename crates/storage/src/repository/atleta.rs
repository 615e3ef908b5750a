use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::atleta::{AtletaFilter, AtletaResponse, AtletaSummary, AtletaWithRefs};
use crate::error::{Result, StorageError};
use crate::models::Atleta;

pub struct AtletaRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AtletaRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new athlete linked to already-resolved category and training
    /// center rows. Runs inside a transaction; a failed insert rolls back when
    /// the transaction guard drops.
    pub async fn create(
        &self,
        atleta: &AtletaResponse,
        categoria_id: i32,
        centro_treinamento_id: i32,
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO atletas \
             (id, created_at, nome, cpf, idade, peso, altura, sexo, categoria_id, centro_treinamento_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(atleta.id)
        .bind(atleta.created_at)
        .bind(&atleta.nome)
        .bind(&atleta.cpf)
        .bind(atleta.idade)
        .bind(atleta.peso)
        .bind(atleta.altura)
        .bind(&atleta.sexo)
        .bind(categoria_id)
        .bind(centro_treinamento_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    /// List athletes as the `{nome, categoria, centro_treinamento}` projection,
    /// with optional name-substring and exact-CPF filters.
    pub async fn list(
        &self,
        filter: &AtletaFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AtletaSummary>> {
        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT a.nome, c.nome AS categoria, ct.nome AS centro_treinamento \
             FROM atletas a \
             JOIN categorias c ON c.pk_id = a.categoria_id \
             JOIN centros_treinamento ct ON ct.pk_id = a.centro_treinamento_id",
        );

        push_filters(&mut query, filter);

        query.push(" ORDER BY a.nome, a.pk_id");
        query.push(" LIMIT ");
        query.push_bind(limit);
        query.push(" OFFSET ");
        query.push_bind(offset);

        let summaries = query
            .build_query_as::<AtletaSummary>()
            .fetch_all(self.pool)
            .await?;

        Ok(summaries)
    }

    /// Count athletes matching the same filters as [`list`](Self::list).
    pub async fn count(&self, filter: &AtletaFilter) -> Result<i64> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM atletas a");

        push_filters(&mut query, filter);

        let total = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(total)
    }

    /// Find an athlete by public identifier, with category and training center
    /// names resolved.
    pub async fn find_by_id(&self, id: Uuid) -> Result<AtletaWithRefs> {
        let atleta = sqlx::query_as::<_, AtletaWithRefs>(
            "SELECT a.id, a.created_at, a.nome, a.cpf, a.idade, a.peso, a.altura, a.sexo, \
                    c.nome AS categoria, ct.nome AS centro_treinamento \
             FROM atletas a \
             JOIN categorias c ON c.pk_id = a.categoria_id \
             JOIN centros_treinamento ct ON ct.pk_id = a.centro_treinamento_id \
             WHERE a.id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(atleta)
    }

    /// Write back a merged athlete row and return the refreshed row. The
    /// category and training center links are immutable after creation and are
    /// not touched here.
    pub async fn update(&self, id: Uuid, merged: &AtletaWithRefs) -> Result<Atleta> {
        let atleta = sqlx::query_as::<_, Atleta>(
            "UPDATE atletas \
             SET nome = $2, cpf = $3, idade = $4, peso = $5, altura = $6, sexo = $7 \
             WHERE id = $1 \
             RETURNING pk_id, id, created_at, nome, cpf, idade, peso, altura, sexo, \
                       categoria_id, centro_treinamento_id",
        )
        .bind(id)
        .bind(&merged.nome)
        .bind(&merged.cpf)
        .bind(merged.idade)
        .bind(merged.peso)
        .bind(merged.altura)
        .bind(&merged.sexo)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(atleta)
    }

    /// Delete an athlete by public identifier.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM atletas WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &AtletaFilter) {
    let mut has_where = false;

    if let Some(nome) = &filter.nome {
        query.push(" WHERE a.nome ILIKE ");
        query.push_bind(format!("%{nome}%"));
        has_where = true;
    }

    if let Some(cpf) = &filter.cpf {
        query.push(if has_where { " AND " } else { " WHERE " });
        query.push("a.cpf = ");
        query.push_bind(cpf.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_compose_conjunctively() {
        let filter = AtletaFilter {
            nome: Some("jo".to_string()),
            cpf: Some("12345678900".to_string()),
        };

        let mut query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM atletas a");
        push_filters(&mut query, &filter);

        let sql = query.sql();
        assert!(sql.contains("WHERE a.nome ILIKE "));
        assert!(sql.contains(" AND a.cpf = "));
    }

    #[test]
    fn cpf_filter_alone_opens_where_clause() {
        let filter = AtletaFilter {
            nome: None,
            cpf: Some("12345678900".to_string()),
        };

        let mut query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM atletas a");
        push_filters(&mut query, &filter);

        let sql = query.sql();
        assert!(sql.contains(" WHERE a.cpf = "));
        assert!(!sql.contains("AND"));
    }

    #[test]
    fn no_filters_leaves_query_untouched() {
        let mut query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM atletas a");
        push_filters(&mut query, &AtletaFilter::default());

        assert_eq!(query.sql(), "SELECT COUNT(*) FROM atletas a");
    }
}
