mod envelope;
mod event;
mod metadata;

pub use envelope::EventEnvelope;
pub use event::DomainEvent;
pub use metadata::{AggregateMetadata, AggregateRoot};
