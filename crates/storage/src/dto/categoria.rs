use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoriaRequest {
    #[validate(length(min = 1, max = 10, message = "nome must be between 1 and 10 characters"))]
    pub nome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriaResponse {
    pub id: Uuid,
    pub nome: String,
}

impl CategoriaResponse {
    pub fn from_request(req: &CreateCategoriaRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            nome: req.nome.clone(),
        }
    }
}

impl From<crate::models::Categoria> for CategoriaResponse {
    fn from(categoria: crate::models::Categoria) -> Self {
        Self {
            id: categoria.id,
            nome: categoria.nome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nome_is_bounded() {
        let req = CreateCategoriaRequest {
            nome: "categoria-longa-demais".to_string(),
        };
        assert!(req.validate().is_err());

        let req = CreateCategoriaRequest {
            nome: "Scale".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn from_request_assigns_identifier() {
        let req = CreateCategoriaRequest {
            nome: "Rx".to_string(),
        };
        let out = CategoriaResponse::from_request(&req);

        assert!(!out.id.is_nil());
        assert_eq!(out.nome, "Rx");
    }
}
