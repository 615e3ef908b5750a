use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct CentroTreinamento {
    pub pk_id: i32,
    pub id: Uuid,
    pub nome: String,
    pub endereco: String,
    pub proprietario: String,
}
