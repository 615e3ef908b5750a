pub mod atleta;
pub mod categoria;
pub mod centro_treinamento;
