use phonebook::api::middleware::AppState;
use phonebook::config::Config;
use phonebook::database::{Database, MemoryStore};
use phonebook::domain::ports::person_repository::PersonRepository;
use phonebook::router::build_router;
use phonebook::services::PersonService;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phonebook=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Pick the storage backend
    let repo: Arc<dyn PersonRepository> = match &config.database_url {
        Some(url) => {
            let db = Database::connect(url).await?;
            tracing::info!("Database connection established");

            db.run_migrations().await?;
            tracing::info!("Database migrations applied");

            Arc::new(db)
        }
        None => {
            tracing::info!("DATABASE_URL not set, using the seeded in-memory store");
            Arc::new(MemoryStore::seeded())
        }
    };

    // Build application state and router
    let state = AppState {
        person_service: PersonService::new(repo, config.duplicate_name_policy),
    };
    let app = build_router(state, &config.static_dir);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
