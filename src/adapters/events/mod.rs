//! Event bus adapters.
//!
//! - `InMemoryEventBus` - In-process capture for tests
//! - `TracingEventPublisher` - Emits events into the structured log

mod in_memory;
mod tracing_publisher;

pub use in_memory::InMemoryEventBus;
pub use tracing_publisher::TracingEventPublisher;
