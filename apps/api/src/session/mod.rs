// Session Store: the single persisted record that lets a learning-path session
// survive a restart.

pub mod record;
pub mod store;

pub use record::{PersistedSession, RestorePlan};
#[cfg(test)]
pub use store::MemorySessionStore;
pub use store::{FileSessionStore, SessionStore, StoreError};
