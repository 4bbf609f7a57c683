//! In-memory adapters for embedding hosts and tests.

mod host;
mod store;

pub use host::RecordingDrawerHost;
pub use store::InMemoryTaskStore;
