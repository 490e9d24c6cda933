// crates/shared-kernel/src/domain/events/metadata.rs

use crate::domain::events::DomainEvent;

/// Données techniques partagées par tous les agrégats :
/// version (Optimistic Concurrency Control) et file d'événements en attente.
#[derive(Debug)]
pub struct AggregateMetadata {
    version: i32,
    events: Vec<Box<dyn DomainEvent>>,
}

impl AggregateMetadata {
    /// Nouvelle instance (version 1 pour une création)
    pub fn new(version: i32) -> Self {
        Self {
            version,
            events: Vec::new(),
        }
    }

    /// RESTAURATION : utilisé par les repositories.
    /// La version vient du stockage, la file d'événements est vide
    /// (on ne re-publie jamais le passé).
    pub fn restore(version: i32) -> Self {
        Self::new(version)
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn add_event(&mut self, event: Box<dyn DomainEvent>) {
        self.events.push(event);
    }

    pub fn pull_events(&mut self) -> Vec<Box<dyn DomainEvent>> {
        std::mem::take(&mut self.events)
    }

    pub fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl Default for AggregateMetadata {
    fn default() -> Self {
        Self::new(1)
    }
}

// Un clone ne transporte jamais les événements en attente
impl Clone for AggregateMetadata {
    fn clone(&self) -> Self {
        Self::restore(self.version)
    }
}

/// Trait maître pour tous les agrégats du système.
/// L'entité n'a qu'à implémenter id() et l'accès aux métadonnées.
pub trait AggregateRoot: Send + Sync {
    fn id(&self) -> String;

    fn metadata(&self) -> &AggregateMetadata;

    fn metadata_mut(&mut self) -> &mut AggregateMetadata;

    // --- Implémentations par défaut ---

    fn version(&self) -> i32 {
        self.metadata().version()
    }

    /// Enregistre un fait métier
    fn add_event(&mut self, event: Box<dyn DomainEvent>) {
        self.metadata_mut().add_event(event);
    }

    /// Récupère et vide la file d'événements (Outbox)
    fn pull_events(&mut self) -> Vec<Box<dyn DomainEvent>> {
        self.metadata_mut().pull_events()
    }

    fn increment_version(&mut self) {
        self.metadata_mut().increment_version();
    }
}
