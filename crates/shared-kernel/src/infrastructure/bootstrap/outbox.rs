// crates/shared-kernel/src/infrastructure/bootstrap/outbox.rs

use std::env;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::application::ports::MessageProducer;
use crate::application::workers::OutboxProcessor;
use crate::domain::repositories::OutboxStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboxRelayConfig {
    pub batch_size: u32,
    pub polling_interval: Duration,
}

impl Default for OutboxRelayConfig {
    fn default() -> Self {
        Self {
            batch_size: 100,
            polling_interval: Duration::from_millis(500),
        }
    }
}

impl OutboxRelayConfig {
    /// Lit `{PREFIX}_NOTIFY_BATCH_SIZE` et `{PREFIX}_NOTIFY_POLLING_MS`, avec valeurs par défaut.
    pub fn from_env(prefix: &str) -> Self {
        let defaults = Self::default();

        let batch_size = env::var(format!("{prefix}_NOTIFY_BATCH_SIZE"))
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|n: &u32| *n > 0)
            .unwrap_or(defaults.batch_size);

        let polling_interval = env::var(format!("{prefix}_NOTIFY_POLLING_MS"))
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.polling_interval);

        Self { batch_size, polling_interval }
    }
}

/// Lance le relais de l'outbox en tâche de fond.
/// Il s'arrête proprement quand `shutdown_rx` passe à `true`.
pub fn spawn_outbox_relay<Store, Broker>(
    domain_name: &'static str,
    store: Store,
    producer: Broker,
    config: OutboxRelayConfig,
    shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    Store: OutboxStore + 'static,
    Broker: MessageProducer + 'static,
{
    let processor = OutboxProcessor::new(store, producer, config.batch_size, config.polling_interval);

    tracing::info!(
        "📡 Outbox relay for {} configured: batch_size={}, interval={:?}",
        domain_name,
        config.batch_size,
        config.polling_interval
    );

    tokio::spawn(async move {
        processor.run(shutdown_rx).await;
        tracing::info!("👋 Outbox relay for {} exited clean", domain_name);
    })
}
