pub mod atletas;
pub mod categorias;
pub mod centros_treinamento;
