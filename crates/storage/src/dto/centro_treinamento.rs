use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a training center.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCentroTreinamentoRequest {
    #[validate(length(min = 1, max = 20, message = "nome must be between 1 and 20 characters"))]
    pub nome: String,

    #[validate(length(min = 1, max = 60, message = "endereco must be between 1 and 60 characters"))]
    pub endereco: String,

    #[validate(length(min = 1, max = 30, message = "proprietario must be between 1 and 30 characters"))]
    pub proprietario: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CentroTreinamentoResponse {
    pub id: Uuid,
    pub nome: String,
    pub endereco: String,
    pub proprietario: String,
}

impl CentroTreinamentoResponse {
    pub fn from_request(req: &CreateCentroTreinamentoRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            nome: req.nome.clone(),
            endereco: req.endereco.clone(),
            proprietario: req.proprietario.clone(),
        }
    }
}

impl From<crate::models::CentroTreinamento> for CentroTreinamentoResponse {
    fn from(centro: crate::models::CentroTreinamento) -> Self {
        Self {
            id: centro.id,
            nome: centro.nome,
            endereco: centro.endereco,
            proprietario: centro.proprietario,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateCentroTreinamentoRequest {
        CreateCentroTreinamentoRequest {
            nome: "CT King".to_string(),
            endereco: "Rua X, Q02".to_string(),
            proprietario: "Marcos".to_string(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn endereco_is_required() {
        let mut req = request();
        req.endereco = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn from_request_copies_fields_and_assigns_id() {
        let out = CentroTreinamentoResponse::from_request(&request());

        assert!(!out.id.is_nil());
        assert_eq!(out.nome, "CT King");
        assert_eq!(out.proprietario, "Marcos");
    }
}
