mod memory_outbox_repository;
mod memory_transaction;
mod memory_transaction_manager;

pub use memory_outbox_repository::{DeadLetter, MemoryOutboxRepository};
pub use memory_transaction::{MemoryTransaction, TransactionExt};
pub use memory_transaction_manager::MemoryTransactionManager;
