use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Reference to a category by its unique name.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CategoriaRef {
    #[validate(length(min = 1, max = 10, message = "nome must be between 1 and 10 characters"))]
    pub nome: String,
}

/// Reference to a training center by its unique name.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CentroTreinamentoRef {
    #[validate(length(min = 1, max = 20, message = "nome must be between 1 and 20 characters"))]
    pub nome: String,
}

/// Request payload for registering a new athlete. The category and training
/// center are referenced by name and resolved before the insert.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAtletaRequest {
    #[validate(length(min = 1, max = 50, message = "nome must be between 1 and 50 characters"))]
    pub nome: String,

    #[validate(length(equal = 11, message = "cpf must be exactly 11 digits"))]
    pub cpf: String,

    #[validate(range(min = 1, max = 120))]
    pub idade: i32,

    #[validate(custom(function = "validate_positive"))]
    pub peso: Decimal,

    #[validate(custom(function = "validate_positive"))]
    pub altura: Decimal,

    #[validate(custom(function = "validate_sexo"))]
    pub sexo: String,

    #[validate(nested)]
    pub categoria: CategoriaRef,

    #[validate(nested)]
    pub centro_treinamento: CentroTreinamentoRef,
}

/// Patch payload for an athlete. Only the fields present are applied; the
/// category and training center links are fixed at creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAtletaRequest {
    #[validate(length(min = 1, max = 50))]
    pub nome: Option<String>,

    #[validate(length(equal = 11))]
    pub cpf: Option<String>,

    #[validate(range(min = 1, max = 120))]
    pub idade: Option<i32>,

    #[validate(custom(function = "validate_positive"))]
    pub peso: Option<Decimal>,

    #[validate(custom(function = "validate_positive"))]
    pub altura: Option<Decimal>,

    #[validate(custom(function = "validate_sexo"))]
    pub sexo: Option<String>,
}

impl UpdateAtletaRequest {
    /// Field-by-field merge into a fresh row value; fields the client omitted
    /// keep their stored values.
    pub fn merge_into(&self, existing: &AtletaWithRefs) -> AtletaWithRefs {
        AtletaWithRefs {
            id: existing.id,
            created_at: existing.created_at,
            nome: self.nome.clone().unwrap_or_else(|| existing.nome.clone()),
            cpf: self.cpf.clone().unwrap_or_else(|| existing.cpf.clone()),
            idade: self.idade.unwrap_or(existing.idade),
            peso: self.peso.unwrap_or(existing.peso),
            altura: self.altura.unwrap_or(existing.altura),
            sexo: self.sexo.clone().unwrap_or_else(|| existing.sexo.clone()),
            categoria: existing.categoria.clone(),
            centro_treinamento: existing.centro_treinamento.clone(),
        }
    }
}

/// Athlete row joined with the names of its category and training center.
#[derive(Debug, Clone, FromRow)]
pub struct AtletaWithRefs {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
    pub peso: Decimal,
    pub altura: Decimal,
    pub sexo: String,
    pub categoria: String,
    pub centro_treinamento: String,
}

/// Full athlete representation returned by create/get/update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AtletaResponse {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
    pub peso: Decimal,
    pub altura: Decimal,
    pub sexo: String,
    pub categoria: CategoriaRef,
    pub centro_treinamento: CentroTreinamentoRef,
}

impl AtletaResponse {
    /// Builds the output shape for a create: assigns the public identifier
    /// and the creation timestamp before anything is persisted.
    pub fn from_request(req: &CreateAtletaRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now().naive_utc(),
            nome: req.nome.clone(),
            cpf: req.cpf.clone(),
            idade: req.idade,
            peso: req.peso,
            altura: req.altura,
            sexo: req.sexo.clone(),
            categoria: req.categoria.clone(),
            centro_treinamento: req.centro_treinamento.clone(),
        }
    }

    /// Assemble the full shape from a refreshed table row plus the (unchanged)
    /// category and training center names.
    pub fn from_model(
        atleta: crate::models::Atleta,
        categoria: String,
        centro_treinamento: String,
    ) -> Self {
        Self {
            id: atleta.id,
            created_at: atleta.created_at,
            nome: atleta.nome,
            cpf: atleta.cpf,
            idade: atleta.idade,
            peso: atleta.peso,
            altura: atleta.altura,
            sexo: atleta.sexo,
            categoria: CategoriaRef { nome: categoria },
            centro_treinamento: CentroTreinamentoRef {
                nome: centro_treinamento,
            },
        }
    }
}

impl From<AtletaWithRefs> for AtletaResponse {
    fn from(atleta: AtletaWithRefs) -> Self {
        Self {
            id: atleta.id,
            created_at: atleta.created_at,
            nome: atleta.nome,
            cpf: atleta.cpf,
            idade: atleta.idade,
            peso: atleta.peso,
            altura: atleta.altura,
            sexo: atleta.sexo,
            categoria: CategoriaRef {
                nome: atleta.categoria,
            },
            centro_treinamento: CentroTreinamentoRef {
                nome: atleta.centro_treinamento,
            },
        }
    }
}

/// Projection returned by the athlete listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AtletaSummary {
    pub nome: String,
    pub categoria: String,
    pub centro_treinamento: String,
}

/// Optional listing filters; both compose conjunctively when supplied.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct AtletaFilter {
    /// Case-insensitive substring match on the athlete name.
    pub nome: Option<String>,
    /// Exact CPF match.
    pub cpf: Option<String>,
}

fn validate_sexo(sexo: &str) -> Result<(), validator::ValidationError> {
    const VALID_SEXOS: &[&str] = &["M", "F"];

    if VALID_SEXOS.contains(&sexo) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_sexo"))
    }
}

fn validate_positive(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value > &Decimal::ZERO {
        Ok(())
    } else {
        Err(validator::ValidationError::new("must_be_positive"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateAtletaRequest {
        CreateAtletaRequest {
            nome: "Joao".to_string(),
            cpf: "12345678900".to_string(),
            idade: 25,
            peso: Decimal::new(755, 1),
            altura: Decimal::new(170, 2),
            sexo: "M".to_string(),
            categoria: CategoriaRef {
                nome: "Scale".to_string(),
            },
            centro_treinamento: CentroTreinamentoRef {
                nome: "CT King".to_string(),
            },
        }
    }

    fn existing() -> AtletaWithRefs {
        AtletaWithRefs {
            id: Uuid::new_v4(),
            created_at: Utc::now().naive_utc(),
            nome: "Joao".to_string(),
            cpf: "12345678900".to_string(),
            idade: 25,
            peso: Decimal::new(755, 1),
            altura: Decimal::new(170, 2),
            sexo: "M".to_string(),
            categoria: "Scale".to_string(),
            centro_treinamento: "CT King".to_string(),
        }
    }

    #[test]
    fn valid_request_passes_validation() {
        assert!(create_request().validate().is_ok());
    }

    #[test]
    fn cpf_must_have_eleven_digits() {
        let mut req = create_request();
        req.cpf = "123".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn sexo_must_be_m_or_f() {
        let mut req = create_request();
        req.sexo = "X".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn peso_must_be_positive() {
        let mut req = create_request();
        req.peso = Decimal::ZERO;
        assert!(req.validate().is_err());
    }

    #[test]
    fn nested_categoria_nome_is_validated() {
        let mut req = create_request();
        req.categoria.nome = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn from_request_assigns_identifier_and_timestamp() {
        let req = create_request();
        let out = AtletaResponse::from_request(&req);

        assert!(!out.id.is_nil());
        assert_eq!(out.nome, req.nome);
        assert_eq!(out.categoria.nome, "Scale");
    }

    #[test]
    fn merge_applies_only_supplied_fields() {
        let before = existing();
        let patch = UpdateAtletaRequest {
            nome: Some("Maria".to_string()),
            idade: Some(30),
            ..Default::default()
        };

        let after = patch.merge_into(&before);

        assert_eq!(after.nome, "Maria");
        assert_eq!(after.idade, 30);
        assert_eq!(after.cpf, before.cpf);
        assert_eq!(after.peso, before.peso);
        assert_eq!(after.sexo, before.sexo);
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let before = existing();
        let after = UpdateAtletaRequest::default().merge_into(&before);

        assert_eq!(after.nome, before.nome);
        assert_eq!(after.cpf, before.cpf);
        assert_eq!(after.idade, before.idade);
    }

    #[test]
    fn summary_serializes_projection_fields() {
        let summary = AtletaSummary {
            nome: "Joao".to_string(),
            categoria: "Scale".to_string(),
            centro_treinamento: "CT King".to_string(),
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "nome": "Joao",
                "categoria": "Scale",
                "centro_treinamento": "CT King"
            })
        );
    }
}
