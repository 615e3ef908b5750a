use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use storage::Database;

use super::handlers::{create_atleta, delete_atleta, get_atleta, list_atletas, update_atleta};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_atleta))
        .route("/", get(list_atletas))
        .route("/:id", get(get_atleta))
        .route("/:id", patch(update_atleta))
        .route("/:id", delete(delete_atleta))
}
