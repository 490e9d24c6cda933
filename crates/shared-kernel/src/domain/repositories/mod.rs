mod outbox_repository;
mod outbox_store;

#[cfg(any(test, feature = "test-utils"))]
mod outbox_repository_stub;

pub use outbox_repository::OutboxRepository;
pub use outbox_store::OutboxStore;

#[cfg(any(test, feature = "test-utils"))]
pub use outbox_repository_stub::OutboxRepositoryStub;
