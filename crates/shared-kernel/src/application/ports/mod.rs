mod message_producer;

pub use message_producer::MessageProducer;
