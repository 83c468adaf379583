mod in_memory_session_store;

pub use in_memory_session_store::{InMemorySessionStore, spawn_idle_sweep};
