use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Row shape of the `atletas` table. The surrogate `pk_id` and the two
/// foreign keys never leave the storage crate.
#[derive(Debug, Clone, FromRow)]
pub struct Atleta {
    pub pk_id: i32,
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
    pub peso: Decimal,
    pub altura: Decimal,
    pub sexo: String,
    pub categoria_id: i32,
    pub centro_treinamento_id: i32,
}
