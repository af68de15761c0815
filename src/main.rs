use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use admin_dashboard_api::config::AppConfig;
use admin_dashboard_api::content::ContentClient;
use admin_dashboard_api::handlers::{self, AppState};
use admin_dashboard_api::session::{SessionConfig, SessionManager};
use admin_dashboard_api::store::redis::RedisStore;
use admin_dashboard_api::store::CredentialStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_dashboard_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // One persistent store connection for the lifetime of the process
    let store: Arc<dyn CredentialStore> = Arc::new(RedisStore::connect(&config.redis_url).await?);
    tracing::info!("✓ Credential store ready");

    let sessions = Arc::new(SessionManager::new(store.clone(), SessionConfig::default()));
    let content = ContentClient::new(config.content_api_url.clone())?;

    let app = handlers::router(AppState {
        store,
        sessions,
        content,
    })
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.bind_addr.parse()?;
    tracing::info!("🚀 Starting admin dashboard API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
