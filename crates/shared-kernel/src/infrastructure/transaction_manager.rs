// crates/shared-kernel/src/infrastructure/transaction_manager.rs

use std::future::Future;
use std::pin::Pin;
use crate::domain::transaction::{Transaction, TransactionManager};
use crate::errors::Result;

/// Sucre syntaxique : accepte une closure async plutôt qu'un `Box<dyn FnOnce>`.
pub trait TransactionManagerExt: TransactionManager {
    fn run_in_transaction<'a, F, Fut>(&'a self, f: F) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>
    where
        F: FnOnce(Box<dyn Transaction>) -> Fut + Send + 'a,
        Fut: Future<Output = Result<()>> + Send + 'a,
    {
        self.in_transaction(Box::new(move |tx| Box::pin(f(tx))))
    }
}

impl<T: TransactionManager + ?Sized> TransactionManagerExt for T {}
