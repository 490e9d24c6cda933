// crates/shared-kernel/src/application/workers/outbox_processor.rs

use crate::application::ports::MessageProducer;
use crate::domain::repositories::OutboxStore;
use crate::errors::Result;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;
use uuid::Uuid;

/// Relais de l'outbox : lit les événements validés et les pousse vers le producteur.
/// Chaque enveloppe est publiée individuellement : un échec n'en bloque pas d'autres.
pub struct OutboxProcessor<Store, Broker>
where
    Store: OutboxStore,
    Broker: MessageProducer,
{
    store: Store,
    broker: Broker,
    batch_size: u32,
    polling_interval: Duration,
}

impl<Store, Broker> OutboxProcessor<Store, Broker>
where
    Store: OutboxStore,
    Broker: MessageProducer,
{
    pub fn new(store: Store, broker: Broker, batch_size: u32, interval: Duration) -> Self {
        Self {
            store,
            broker,
            batch_size: batch_size.max(1),
            polling_interval: interval,
        }
    }

    pub async fn run(&self, mut shutdown_signal: watch::Receiver<bool>) {
        tracing::info!(batch_size = self.batch_size, "Outbox processor started");

        loop {
            // 1. Vérification immédiate du signal d'arrêt
            if *shutdown_signal.borrow() {
                break;
            }

            // 2. Traitement d'un batch
            let delivered = match self.process_batch().await {
                Ok(count) => {
                    if count > 0 {
                        tracing::info!("Relayed {} events", count);
                    }
                    count
                }
                Err(e) => {
                    tracing::error!("Relay error: {}", e);
                    0
                }
            };

            // 3. Batch complet : on reboucle pour vider le backlog.
            // Sinon on attend le prochain intervalle ou le signal d'arrêt
            if delivered < self.batch_size as usize {
                tokio::select! {
                    _ = sleep(self.polling_interval) => {},
                    _ = shutdown_signal.changed() => break,
                }
            }
        }

        // Dernier passage pour ne pas laisser de notifications validées derrière nous
        if let Err(e) = self.process_batch().await {
            tracing::warn!("Final relay pass failed: {}", e);
        }

        tracing::info!("Outbox processor stopped gracefully");
    }

    /// Traite un lot et renvoie le nombre d'enveloppes publiées avec succès.
    pub async fn process_batch(&self) -> Result<usize> {
        let envelopes = self.store.fetch_unprocessed(self.batch_size).await?;

        if envelopes.is_empty() {
            return Ok(0);
        }

        let mut delivered: Vec<Uuid> = Vec::with_capacity(envelopes.len());

        for envelope in &envelopes {
            match self.broker.publish(envelope).await {
                Ok(()) => delivered.push(envelope.id),
                Err(e) => {
                    tracing::warn!(
                        event_id = %envelope.id,
                        event_type = %envelope.event_type,
                        "Publication failed: {}",
                        e
                    );
                    self.store.mark_as_failed(envelope.id, e.to_string()).await?;
                }
            }
        }

        if !delivered.is_empty() {
            self.store.mark_as_processed(&delivered).await?;
        }

        Ok(delivered.len())
    }
}
