// crates/shared-kernel/src/infrastructure/mod.rs

pub mod bootstrap;
pub mod memory;

mod retry;
mod transaction_manager;

pub use retry::{with_retry, RetryConfig};
pub use transaction_manager::TransactionManagerExt;
