// crates/shared-kernel/src/domain/transaction/transaction_manager_stub.rs

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use crate::domain::transaction::{FakeTransaction, Transaction, TransactionManager};
use crate::errors::Result;

#[derive(Default)]
pub struct StubTxManager {
    commits: Arc<AtomicUsize>,
}

impl StubTxManager {
    /// Nombre de transactions effectivement validées
    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }
}

impl TransactionManager for StubTxManager {
    fn in_transaction<'a>(
        &'a self,
        f: Box<dyn FnOnce(Box<dyn Transaction>) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> + Send + 'a>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let tx = Box::new(FakeTransaction::new(self.commits.clone()));
        Box::pin(async move { f(tx).await })
    }
}
