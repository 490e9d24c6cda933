// crates/shared-kernel/src/infrastructure/memory/memory_transaction_manager.rs

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::Mutex;
use crate::domain::transaction::{Transaction, TransactionManager};
use crate::errors::Result;
use crate::infrastructure::memory::MemoryTransaction;

/// Sérialise les transactions en mémoire derrière un verrou unique.
#[derive(Clone, Default)]
pub struct MemoryTransactionManager {
    lock: Arc<Mutex<()>>,
}

impl MemoryTransactionManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionManager for MemoryTransactionManager {
    fn in_transaction<'a>(
        &'a self,
        f: Box<dyn FnOnce(Box<dyn Transaction>) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> + Send + 'a>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let lock = self.lock.clone();
        Box::pin(async move {
            let guard = lock.lock_owned().await;
            let tx = Box::new(MemoryTransaction::new(guard));
            f(tx).await
        })
    }
}
