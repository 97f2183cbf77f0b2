use anyhow::Result;
use green_board::{
    application::services::ApplicationServices,
    config::{AppConfig, StorageBackend},
    domain::{
        article::{ArticleRepository, ArticleUnitOfWork},
        comment::CommentRepository,
    },
    infrastructure::{
        database,
        repositories::{
            InMemoryStore, PostgresArticleRepository, PostgresArticleUnitOfWork,
            PostgresCommentRepository,
        },
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let services = Arc::new(build_services(&config).await?);
    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_services(config: &AppConfig) -> Result<ApplicationServices> {
    let services = match config.storage() {
        StorageBackend::Postgres(url) => {
            let pool = database::init_pool(&url, config.max_connections()).await?;
            database::run_migrations(&pool).await?;

            let article_repo: Arc<dyn ArticleRepository> =
                Arc::new(PostgresArticleRepository::new(pool.clone()));
            let unit_of_work: Arc<dyn ArticleUnitOfWork> =
                Arc::new(PostgresArticleUnitOfWork::new(pool.clone()));
            let comment_repo: Arc<dyn CommentRepository> =
                Arc::new(PostgresCommentRepository::new(pool));
            ApplicationServices::new(article_repo, unit_of_work, comment_repo)
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on shutdown");
            let store = InMemoryStore::new();
            let article_repo: Arc<dyn ArticleRepository> = Arc::new(store.clone());
            let unit_of_work: Arc<dyn ArticleUnitOfWork> = Arc::new(store.clone());
            let comment_repo: Arc<dyn CommentRepository> = Arc::new(store);
            ApplicationServices::new(article_repo, unit_of_work, comment_repo)
        }
    };
    Ok(services)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
