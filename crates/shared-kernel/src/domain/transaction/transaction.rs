// crates/shared-kernel/src/domain/transaction/transaction.rs

use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use crate::errors::Result;

/// Unité de travail opaque. Un drop sans `commit` vaut rollback.
pub trait Transaction: Send + Sync + Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;

    // Retour boxé pour garder le trait "dyn compatible"
    fn commit(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}
