mod outbox;

pub use outbox::{spawn_outbox_relay, OutboxRelayConfig};
