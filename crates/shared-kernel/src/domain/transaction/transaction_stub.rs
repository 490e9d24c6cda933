// crates/shared-kernel/src/domain/transaction/transaction_stub.rs

use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use crate::domain::transaction::Transaction;
use crate::errors::Result;

/// Transaction factice : ne persiste rien, compte seulement les commits.
#[derive(Default)]
pub struct FakeTransaction {
    commits: Arc<AtomicUsize>,
}

impl FakeTransaction {
    pub fn new(commits: Arc<AtomicUsize>) -> Self {
        Self { commits }
    }
}

impl Transaction for FakeTransaction {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn commit(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async {
            self.commits.fetch_add(1, Ordering::SeqCst);
            tracing::debug!("🛠️ FakeTransaction: commit called");
            Ok(())
        })
    }
}
