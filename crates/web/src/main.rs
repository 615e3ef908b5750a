use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::atletas::handlers::create_atleta,
        features::atletas::handlers::list_atletas,
        features::atletas::handlers::get_atleta,
        features::atletas::handlers::update_atleta,
        features::atletas::handlers::delete_atleta,
        features::categorias::handlers::create_categoria,
        features::categorias::handlers::list_categorias,
        features::categorias::handlers::get_categoria,
        features::centros_treinamento::handlers::create_centro_treinamento,
        features::centros_treinamento::handlers::list_centros_treinamento,
        features::centros_treinamento::handlers::get_centro_treinamento,
    ),
    components(
        schemas(
            storage::dto::atleta::CreateAtletaRequest,
            storage::dto::atleta::UpdateAtletaRequest,
            storage::dto::atleta::AtletaResponse,
            storage::dto::atleta::AtletaSummary,
            storage::dto::atleta::CategoriaRef,
            storage::dto::atleta::CentroTreinamentoRef,
            storage::dto::categoria::CreateCategoriaRequest,
            storage::dto::categoria::CategoriaResponse,
            storage::dto::centro_treinamento::CreateCentroTreinamentoRequest,
            storage::dto::centro_treinamento::CentroTreinamentoResponse,
            storage::dto::common::PaginationMeta,
            storage::dto::common::PaginatedResponse<storage::dto::atleta::AtletaSummary>,
        )
    ),
    tags(
        (name = "atletas", description = "Athlete endpoints"),
        (name = "categorias", description = "Category endpoints"),
        (name = "centros_treinamento", description = "Training center endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Workout API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/atletas", features::atletas::routes::routes())
        .nest("/categorias", features::categorias::routes::routes())
        .nest(
            "/centros_treinamento",
            features::centros_treinamento::routes::routes(),
        )
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
