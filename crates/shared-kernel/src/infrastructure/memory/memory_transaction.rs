// crates/shared-kernel/src/infrastructure/memory/memory_transaction.rs

use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use tokio::sync::OwnedMutexGuard;
use crate::domain::transaction::Transaction;
use crate::errors::{DomainError, Result};

type StagedWrite = Box<dyn FnOnce() + Send + Sync>;

/// Transaction en mémoire : les écritures sont mises en attente puis appliquées
/// d'un bloc au `commit`. Le verrou global est tenu jusqu'au drop.
pub struct MemoryTransaction {
    staged: Vec<StagedWrite>,
    committed: bool,
    _guard: OwnedMutexGuard<()>,
}

impl MemoryTransaction {
    pub(crate) fn new(guard: OwnedMutexGuard<()>) -> Self {
        Self {
            staged: Vec::new(),
            committed: false,
            _guard: guard,
        }
    }

    /// Met une écriture en attente : elle ne sera visible qu'après le commit.
    pub fn stage(&mut self, write: impl FnOnce() + Send + Sync + 'static) {
        self.staged.push(Box::new(write));
    }

    pub fn staged_writes(&self) -> usize {
        self.staged.len()
    }
}

impl Transaction for MemoryTransaction {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn commit(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            if self.committed {
                return Err(DomainError::Internal("Transaction already committed".into()));
            }
            for write in self.staged.drain(..) {
                write();
            }
            self.committed = true;
            Ok(())
        })
    }
}

impl Drop for MemoryTransaction {
    fn drop(&mut self) {
        if !self.committed && !self.staged.is_empty() {
            tracing::debug!(discarded = self.staged.len(), "Memory transaction rolled back");
        }
    }
}

/// Helper de conversion pour les repositories en mémoire
pub trait TransactionExt {
    fn downcast_mut_memory(&mut self) -> Result<&mut MemoryTransaction>;
}

impl TransactionExt for dyn Transaction + '_ {
    fn downcast_mut_memory(&mut self) -> Result<&mut MemoryTransaction> {
        self.as_any_mut()
            .downcast_mut::<MemoryTransaction>()
            .ok_or_else(|| DomainError::Internal("Type mismatch: Expected MemoryTransaction".into()))
    }
}
