use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Categoria {
    pub pk_id: i32,
    pub id: Uuid,
    pub nome: String,
}
