//! Pair Connect API server.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pair_connect::adapters::auth::JwtTokenValidator;
use pair_connect::adapters::events::TracingEventPublisher;
use pair_connect::adapters::http::{api_router, AppPorts, RouterOptions};
use pair_connect::adapters::mail::{LogMailTransport, ResendMailTransport};
use pair_connect::adapters::memory::InMemoryStore;
use pair_connect::adapters::notifications::{DirectDispatcher, QueuedDispatcher};
use pair_connect::adapters::postgres::{
    PostgresCatalogReader, PostgresDeveloperDirectory, PostgresInterestRepository,
    PostgresProjectRepository, PostgresSessionReader, PostgresSessionRepository,
};
use pair_connect::config::{AppConfig, EmailTransport, NotificationMode};
use pair_connect::domain::catalog::{Level, ProgLanguage};
use pair_connect::domain::foundation::{LanguageId, LevelId};
use pair_connect::ports::{EventPublisher, MailTransport, NotificationDispatcher, TokenValidator};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}

/// Reference data for running without a database.
fn development_store() -> InMemoryStore {
    let levels = ["Junior", "Mid", "Senior"]
        .into_iter()
        .map(|name| Level::new(LevelId::new(), name))
        .collect();
    let languages = ["Python", "JavaScript", "TypeScript", "Go", "Rust", "Java"]
        .into_iter()
        .map(|name| ProgLanguage::new(LanguageId::new(), name))
        .collect();
    InMemoryStore::new().with_catalog(levels, languages)
}

fn mail_transport(config: &AppConfig) -> Result<Arc<dyn MailTransport>, BoxError> {
    match config.email.transport {
        EmailTransport::Log => Ok(Arc::new(LogMailTransport::new())),
        EmailTransport::Resend => {
            let key = config
                .email
                .resend_api_key
                .clone()
                .ok_or("EMAIL__RESEND_API_KEY is required for the resend transport")?;
            Ok(Arc::new(ResendMailTransport::new(
                key,
                config.email.from_header(),
            )))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let transport = mail_transport(&config)?;
    let timeout = config.notifications.delivery_timeout();
    let (dispatcher, queued): (Arc<dyn NotificationDispatcher>, Option<Arc<QueuedDispatcher>>) =
        match config.notifications.mode {
            NotificationMode::Direct => (Arc::new(DirectDispatcher::new(transport, timeout)), None),
            NotificationMode::Queued => {
                let queued = Arc::new(QueuedDispatcher::spawn(
                    transport,
                    config.notifications.queue_capacity,
                    timeout,
                ));
                (queued.clone(), Some(queued))
            }
        };

    let events: Arc<dyn EventPublisher> = Arc::new(TracingEventPublisher::new());
    let tokens: Arc<dyn TokenValidator> = Arc::new(JwtTokenValidator::new(&config.auth));

    let ports = if config.database.is_configured() {
        let pool = PgPoolOptions::new()
            .min_connections(config.database.min_connections)
            .max_connections(config.database.max_connections)
            .acquire_timeout(config.database.acquire_timeout())
            .connect(&config.database.url)
            .await?;

        if config.database.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations applied");
        }

        AppPorts {
            projects: Arc::new(PostgresProjectRepository::new(pool.clone())),
            sessions: Arc::new(PostgresSessionRepository::new(pool.clone())),
            session_reader: Arc::new(PostgresSessionReader::new(pool.clone())),
            interests: Arc::new(PostgresInterestRepository::new(pool.clone())),
            directory: Arc::new(PostgresDeveloperDirectory::new(pool.clone())),
            catalog: Arc::new(PostgresCatalogReader::new(pool)),
            dispatcher,
            events,
            tokens,
        }
    } else {
        tracing::warn!("No database configured; using the in-memory store");
        AppPorts::in_memory(Arc::new(development_store()), dispatcher, events, tokens)
    };

    let app = api_router(ports, RouterOptions::from(&config.server));

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Pair Connect listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(queued) = queued {
        match Arc::try_unwrap(queued) {
            Ok(queued) => queued.shutdown().await,
            Err(_) => tracing::warn!("Notification queue still shared; pending mail dropped"),
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}
