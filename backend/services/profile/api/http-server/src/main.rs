// backend/services/profile/api/http-server/src/main.rs

use std::env;
use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use profile::infrastructure::bootstrap::{ProfileService, SeedData};
use shared_kernel::infrastructure::bootstrap::OutboxRelayConfig;
use shared_kernel::infrastructure::memory::MemoryOutboxRepository;

const ENV_PREFIX: &str = "PROFILE";

/// Configuration du serveur, lue depuis l'environnement puis surchargeable.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub seed_file: Option<PathBuf>,
    pub relay: OutboxRelayConfig,
    pub max_attempts: u32,
    pub mail_from: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed_file: None,
            relay: OutboxRelayConfig::default(),
            max_attempts: MemoryOutboxRepository::DEFAULT_MAX_ATTEMPTS,
            mail_from: "no-reply@profiles.local".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        let defaults = Self::default();

        let addr = match env::var(format!("{ENV_PREFIX}_HTTP_ADDR")) {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.addr,
        };

        let max_attempts = env::var(format!("{ENV_PREFIX}_NOTIFY_MAX_ATTEMPTS"))
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|n: &u32| *n > 0)
            .unwrap_or(defaults.max_attempts);

        Ok(Self {
            addr,
            seed_file: env::var(format!("{ENV_PREFIX}_SEED_FILE")).ok().map(PathBuf::from),
            relay: OutboxRelayConfig::from_env(ENV_PREFIX),
            max_attempts,
            mail_from: env::var(format!("{ENV_PREFIX}_MAIL_FROM")).unwrap_or(defaults.mail_from),
        })
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_seed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_file = Some(path.into());
        self
    }

    pub fn with_relay(mut self, relay: OutboxRelayConfig) -> Self {
        self.relay = relay;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_mail_from(mut self, from: impl Into<String>) -> Self {
        self.mail_from = from.into();
        self
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    run_server(ServerConfig::from_env()?).await
}

/// Construit le service, puis sert jusqu'à Ctrl+C.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn Error>> {
    // --- 1. ASSEMBLAGE DU SERVICE ---
    let mut builder = ProfileService::builder()
        .with_mail_from(config.mail_from.clone())
        .with_max_attempts(config.max_attempts);

    if let Some(path) = &config.seed_file {
        builder = builder.with_seed(SeedData::from_file(path)?);
    }
    let service = builder.build().await?;

    for session in service.seeded_sessions() {
        tracing::info!(user_id = %session.user_id, role = session.role.as_str(), token = %session.token, "🔑 Seeded session");
    }

    // --- 2. SIGNAL D'ARRÊT ---
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("🛑 Shutdown signal received");
        }
        let _ = shutdown_tx.send(true);
    });

    // --- 3. SERVEUR HTTP + RELAIS ---
    let listener = TcpListener::bind(config.addr).await?;
    serve(service, listener, config.relay, shutdown_rx).await
}

/// Sert l'API sur `listener` et fait tourner le relais de notifications
/// jusqu'à ce que `shutdown_rx` passe à `true`.
pub async fn serve(
    service: ProfileService,
    listener: TcpListener,
    relay: OutboxRelayConfig,
    shutdown_rx: watch::Receiver<bool>,
) -> Result<(), Box<dyn Error>> {
    let relay_handle = service.spawn_notification_relay(relay, shutdown_rx.clone())?;

    tracing::info!("🚀 Profile HTTP server listening on {}", listener.local_addr()?);

    let mut server_shutdown = shutdown_rx;
    axum::serve(listener, service.router())
        .with_graceful_shutdown(async move {
            let _ = server_shutdown.wait_for(|stop| *stop).await;
        })
        .await?;

    // Le relais termine son dernier passage avant de rendre la main
    relay_handle.await?;

    tracing::info!("👋 Profile HTTP server stopped");
    Ok(())
}
